//! Migration execution engine.
//!
//! Owns the migration state machine: checks the system-disk precondition,
//! re-points the target VM at the source machine and drives the transfer
//! through a [`TransferExecutor`].

use crate::error::{ConvoyError, Result};
use crate::types::{Migration, MigrationState};
use std::sync::Arc;
use tracing::{info, instrument, warn};

mod transfer;

pub use transfer::{SimulatedTransfer, TransferExecutor};

/// Drives migrations through their lifecycle.
pub struct MigrationEngine {
    transfer: Arc<dyn TransferExecutor>,
}

impl MigrationEngine {
    pub fn new(transfer: Arc<dyn TransferExecutor>) -> Self {
        Self { transfer }
    }

    /// Run a migration to completion.
    ///
    /// The selected mounts must include the system disk; if they don't, the
    /// run is refused with `MissingSystemDisk` and the migration is left
    /// untouched. The caller is responsible for not invoking this on a
    /// migration that is already `running` — boundary adapters check the
    /// state and skip with a warning.
    ///
    /// On the happy path the state moves `not started -> running -> success`
    /// and the target VM ends up pointing at the source machine with exactly
    /// the selected mounts as storage. A transfer failure leaves the state at
    /// `error`; re-running from there is allowed.
    #[instrument(skip(self, migration), fields(source_ip = %migration.source.ip, executor = self.transfer.name()))]
    pub async fn run(&self, migration: &mut Migration) -> Result<()> {
        if !migration.has_system_disk() {
            warn!("selected mounts do not include the system disk, refusing to start");
            return Err(ConvoyError::MissingSystemDisk);
        }

        migration.retarget();
        migration.state = MigrationState::Running;
        info!("starting migration");

        match self.transfer.transfer(&migration.source, &migration.target).await {
            Ok(()) => {
                migration.state = MigrationState::Success;
                info!("migration finished successfully");
                Ok(())
            }
            Err(e) => {
                migration.state = MigrationState::Error;
                Err(ConvoyError::ExecutionFailed {
                    source_ip: migration.source.ip.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
