//! The migration aggregate and its lifecycle state.

use crate::error::ConvoyError;
use crate::types::target::MigrationTarget;
use crate::types::workload::{MountPoint, Workload};
use std::str::FromStr;

/// Mount path that must be among the selected mounts before a migration may
/// run. Matched case-insensitively.
pub const SYSTEM_DISK: &str = "c:\\";

/// Lifecycle state of a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationState {
    /// Declared but never run.
    NotStarted,

    /// Transfer in progress.
    Running,

    /// Transfer failed. Re-running is allowed.
    Error,

    /// Transfer completed.
    Success,
}

impl MigrationState {
    /// Convert to the wire string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl FromStr for MigrationState {
    type Err = ConvoyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not started" => Ok(Self::NotStarted),
            "running" => Ok(Self::Running),
            "error" => Ok(Self::Error),
            "success" => Ok(Self::Success),
            other => Err(ConvoyError::validation(
                "migration_state",
                format!("unknown state: {}", other),
            )),
        }
    }
}

impl std::fmt::Display for MigrationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate tracking one workload's move from a source machine to a cloud
/// target. Everything else is reachable only through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Mounts selected for transfer; only these are copied.
    pub selected_mounts: Vec<MountPoint>,
    pub source: Workload,
    pub target: MigrationTarget,
    pub state: MigrationState,
}

impl Migration {
    /// Declare a new migration in the `not started` state.
    pub fn new(selected_mounts: Vec<MountPoint>, source: Workload, target: MigrationTarget) -> Self {
        Self::with_state(selected_mounts, source, target, MigrationState::NotStarted)
    }

    /// Reconstruct a migration in a known state (used when unpacking records).
    pub fn with_state(
        selected_mounts: Vec<MountPoint>,
        source: Workload,
        target: MigrationTarget,
        state: MigrationState,
    ) -> Self {
        Self { selected_mounts, source, target, state }
    }

    /// True when the selected mounts contain the system disk.
    pub fn has_system_disk(&self) -> bool {
        self.selected_mounts.iter().any(|m| m.path.eq_ignore_ascii_case(SYSTEM_DISK))
    }

    /// Re-point the target VM at the source machine.
    ///
    /// The target VM takes the source workload's ip and credentials, and its
    /// storage is replaced by the selected mounts. Whatever storage the
    /// target was declared with is overwritten.
    pub fn retarget(&mut self) {
        self.target.target_vm.ip = self.source.ip.clone();
        self.target.target_vm.credentials = self.source.credentials.clone();
        self.target.target_vm.storage = self.selected_mounts.clone();
    }
}
