//! Wire format for persisted migration records.
//!
//! A record is the full JSON snapshot of a migration and its constituent
//! entities, keyed by the dotted source IP address. [`pack`] flattens the
//! entity graph into the document shape; [`unpack`] rebuilds the entities
//! through their validating constructors, so a malformed record surfaces as
//! a validation error rather than a half-built aggregate.

use crate::error::Result;
use crate::types::{
    CloudType, Credentials, Migration, MigrationState, MigrationTarget, MountPoint, Source,
    Workload,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from mount path to volume size in bytes.
///
/// Packing a mount list this way is lossless for data but lossy for order;
/// duplicate paths collapse to one entry, last write wins.
pub type MountMap = BTreeMap<String, u64>;

/// Persisted form of a migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub source: SourceSection,
    pub source_machine: CredentialsSection,
    pub target_machine: CredentialsSection,
    pub cloud_credentials: CredentialsSection,
    pub mount_points: MountMap,
    pub workload: WorkloadSection,
    pub migration_target: TargetSection,
    pub migration: MigrationSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSection {
    pub source_ip: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsSection {
    pub username: String,
    pub password: String,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSection {
    pub source_machine: MachineSection,
    pub target_machine: MachineSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSection {
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSection {
    pub cloud_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSection {
    pub selected_mounts: MountMap,
    pub migration_state: String,
}

impl MigrationRecord {
    /// Record key for this document, derived from the source IP.
    pub fn key(&self) -> String {
        record_key(&self.source.source_ip)
    }
}

impl CredentialsSection {
    fn to_credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone(), self.domain.clone())
    }
}

impl From<&Credentials> for CredentialsSection {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            domain: credentials.domain.clone(),
        }
    }
}

/// Derive the record key from a dotted source IP.
///
/// Splitting on `.` and re-joining with `.` is the identity for IPv4 dotted
/// form; it is spelled out because the derivation is part of the store
/// contract and must match across create, read, write and remove.
pub fn record_key(source_ip: &str) -> String {
    source_ip.split('.').collect::<Vec<_>>().join(".")
}

/// A migration as reconstructed from a record: the source declaration plus
/// the migration aggregate.
#[derive(Debug, Clone)]
pub struct MigrationPlan {
    pub source: Source,
    pub migration: Migration,
}

fn mount_map(mounts: &[MountPoint]) -> MountMap {
    mounts.iter().map(|m| (m.path.clone(), m.size_bytes)).collect()
}

fn mount_list(map: &MountMap) -> Vec<MountPoint> {
    map.iter().map(|(path, size)| MountPoint::new(path.clone(), *size)).collect()
}

/// Flatten the entity graph into the persisted document shape.
///
/// The `mount_points` section is the source workload's full storage list;
/// the migration's own selection is packed separately under `migration`.
pub fn pack(source: &Source, migration: &Migration) -> MigrationRecord {
    MigrationRecord {
        source: SourceSection {
            source_ip: source.ip().to_string(),
            username: source.username().to_string(),
            password: source.password().to_string(),
        },
        source_machine: CredentialsSection::from(&migration.source.credentials),
        target_machine: CredentialsSection::from(&migration.target.target_vm.credentials),
        cloud_credentials: CredentialsSection::from(&migration.target.cloud_credentials),
        mount_points: mount_map(&migration.source.storage),
        workload: WorkloadSection {
            source_machine: MachineSection { ip: migration.source.ip.clone() },
            target_machine: MachineSection { ip: migration.target.target_vm.ip.clone() },
        },
        migration_target: TargetSection { cloud_type: migration.target.cloud_type.to_string() },
        migration: MigrationSection {
            selected_mounts: mount_map(&migration.selected_mounts),
            migration_state: migration.state.to_string(),
        },
    }
}

/// Rebuild the entity graph from a persisted document.
///
/// Both the source and target workloads are built from the same full
/// `mount_points` mapping; only the selected mounts come from the
/// `migration` section. Construction failures (bad cloud type, unknown
/// state, empty source fields) abort reconstruction and surface to the
/// caller.
pub fn unpack(record: &MigrationRecord) -> Result<MigrationPlan> {
    let source = Source::new(
        &record.source.username,
        &record.source.password,
        &record.source.source_ip,
    )?;

    let mounts = mount_list(&record.mount_points);
    let source_vm = Workload::new(
        record.workload.source_machine.ip.clone(),
        record.source_machine.to_credentials(),
        mounts.clone(),
    );
    let target_vm = Workload::new(
        record.workload.target_machine.ip.clone(),
        record.target_machine.to_credentials(),
        mounts,
    );

    let cloud_type: CloudType = record.migration_target.cloud_type.parse()?;
    let target =
        MigrationTarget::new(cloud_type, record.cloud_credentials.to_credentials(), target_vm);

    let state: MigrationState = record.migration.migration_state.parse()?;
    let migration = Migration::with_state(
        mount_list(&record.migration.selected_mounts),
        source_vm,
        target,
        state,
    );

    Ok(MigrationPlan { source, migration })
}
