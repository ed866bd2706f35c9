//! Transfer executor abstraction.
//!
//! Real data movement to a hypervisor or cloud API lives behind this trait;
//! the engine only drives it. The in-tree implementation simulates the
//! transfer with a fixed delay.

use crate::error::Result;
use crate::types::{MigrationTarget, Workload};
use async_trait::async_trait;
use std::time::Duration;
use tracing::info;

/// Transfer collaborator trait.
///
/// Implementations move the selected data from the source machine onto the
/// target VM. Failures surface as errors; the engine owns the resulting
/// state transition.
#[async_trait]
pub trait TransferExecutor: Send + Sync {
    /// Move the source workload's data onto the target VM.
    async fn transfer(&self, source: &Workload, target: &MigrationTarget) -> Result<()>;

    /// Executor name (for logging).
    fn name(&self) -> &str;
}

/// Simulated transfer: a fixed delay stands in for real I/O.
pub struct SimulatedTransfer {
    delay: Duration,
}

impl SimulatedTransfer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransfer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl TransferExecutor for SimulatedTransfer {
    async fn transfer(&self, source: &Workload, target: &MigrationTarget) -> Result<()> {
        info!(
            source_ip = %source.ip,
            target_ip = %target.target_vm.ip,
            cloud = %target.cloud_type,
            mounts = target.target_vm.storage.len(),
            "simulating transfer"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
