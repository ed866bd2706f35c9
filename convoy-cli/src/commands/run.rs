//! `convoy run` command

use anyhow::{bail, Context, Result};
use convoy_core::{
    pack, unpack, ConvoyError, MigrationEngine, MigrationState, RecordStore, SimulatedTransfer,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Run the migration described by a JSON record file.
///
/// The record is loaded through the store rooted at the file's directory and
/// keyed by its name, so the updated state lands back in the same file
/// afterwards. Records already in the `running` state are skipped.
pub async fn run(data: &Path, transfer_delay: Duration) -> Result<()> {
    let dir = data.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let key = data
        .file_stem()
        .and_then(|s| s.to_str())
        .context("record path has no file name")?
        .to_string();

    let store = RecordStore::new(dir).await?;
    let record = store.read(&key).await?;
    let mut plan = unpack(&record)?;

    if plan.migration.state == MigrationState::Running {
        eprintln!("migration {} is already running, skipping", key);
        return Ok(());
    }

    let engine = MigrationEngine::new(Arc::new(SimulatedTransfer::new(transfer_delay)));

    match engine.run(&mut plan.migration).await {
        Ok(()) => {
            store.write(&key, &pack(&plan.source, &plan.migration)).await?;
            println!("migration {} finished: {}", key, plan.migration.state);
            Ok(())
        }
        Err(e @ ConvoyError::MissingSystemDisk) => {
            // State did not change; leave the stored record as declared.
            bail!("cannot start migration {}: {}", key, e)
        }
        Err(e) => {
            store.write(&key, &pack(&plan.source, &plan.migration)).await?;
            Err(e).with_context(|| format!("migration {} failed", key))
        }
    }
}
