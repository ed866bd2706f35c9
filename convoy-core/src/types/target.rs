//! Migration target types.

use crate::error::ConvoyError;
use crate::types::workload::{Credentials, Workload};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target cloud platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudType {
    Aws,
    Azure,
    Vsphere,
    Vcloud,
}

impl CloudType {
    /// Convert to string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::Vsphere => "vsphere",
            Self::Vcloud => "vcloud",
        }
    }
}

impl FromStr for CloudType {
    type Err = ConvoyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            "vsphere" => Ok(Self::Vsphere),
            "vcloud" => Ok(Self::Vcloud),
            other => Err(ConvoyError::validation(
                "cloud_type",
                format!("{} is not a supported cloud type", other),
            )),
        }
    }
}

impl std::fmt::Display for CloudType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Target for a migration: the cloud account and the VM that will receive
/// the workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationTarget {
    pub cloud_type: CloudType,
    pub cloud_credentials: Credentials,
    pub target_vm: Workload,
}

impl MigrationTarget {
    pub fn new(cloud_type: CloudType, cloud_credentials: Credentials, target_vm: Workload) -> Self {
        Self { cloud_type, cloud_credentials, target_vm }
    }
}
