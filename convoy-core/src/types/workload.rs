//! Machine-side domain types: credentials, mount points, workloads.

use crate::error::{ConvoyError, Result};

/// Authorization credentials for a machine or a cloud account.
///
/// Opaque to the core: no validation beyond presence in the owning entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub domain: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self { username: username.into(), password: password.into(), domain: domain.into() }
    }
}

/// A storage volume identified by a path or drive designator.
///
/// `size_bytes` is the volume size in bytes. Identity within a workload's
/// storage set is the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    pub path: String,
    pub size_bytes: u64,
}

impl MountPoint {
    pub fn new(path: impl Into<String>, size_bytes: u64) -> Self {
        Self { path: path.into(), size_bytes }
    }
}

/// A machine taking part in a migration, on either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub ip: String,
    pub credentials: Credentials,
    pub storage: Vec<MountPoint>,
}

impl Workload {
    pub fn new(ip: impl Into<String>, credentials: Credentials, storage: Vec<MountPoint>) -> Self {
        Self { ip: ip.into(), credentials, storage }
    }
}

/// Declaration of the machine a migration starts from.
///
/// All three fields are required; construction fails on empty input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    username: String,
    password: String,
    ip: String,
}

impl Source {
    pub fn new(username: &str, password: &str, ip: &str) -> Result<Self> {
        if username.is_empty() {
            return Err(ConvoyError::validation("username", "must not be empty"));
        }
        if password.is_empty() {
            return Err(ConvoyError::validation("password", "must not be empty"));
        }
        if ip.is_empty() {
            return Err(ConvoyError::validation("ip", "must not be empty"));
        }
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            ip: ip.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_requires_all_fields() {
        assert!(Source::new("admin", "secret", "10.0.0.5").is_ok());

        for (username, password, ip, field) in [
            ("", "secret", "10.0.0.5", "username"),
            ("admin", "", "10.0.0.5", "password"),
            ("admin", "secret", "", "ip"),
        ] {
            match Source::new(username, password, ip) {
                Err(ConvoyError::Validation { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected validation error for {}, got {:?}", field, other),
            }
        }
    }
}
