//! `convoy rm` command

use anyhow::Result;
use convoy_core::RecordStore;
use std::path::Path;

/// Remove migration records by key, reporting per-key status.
pub async fn rm(storage_dir: &Path, keys: &[String]) -> Result<()> {
    let store = RecordStore::new(storage_dir).await?;
    let report = store.remove(keys).await?;

    for key in &report.removed {
        println!("removed {}", key);
    }
    for key in &report.missing {
        println!("migration with IP {} does not exist", key);
    }

    Ok(())
}
