//! `convoy ls` command

use anyhow::Result;
use convoy_core::RecordStore;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "CLOUD")]
    cloud: String,
    #[tabled(rename = "STATE")]
    state: String,
    #[tabled(rename = "TARGET IP")]
    target_ip: String,
    #[tabled(rename = "SELECTED MOUNTS")]
    mounts: usize,
}

/// List stored migration records.
pub async fn ls(storage_dir: &Path) -> Result<()> {
    let store = RecordStore::new(storage_dir).await?;
    let keys = store.list().await?;

    if keys.is_empty() {
        println!("No migration records found.");
        return Ok(());
    }

    let mut rows = Vec::new();
    for key in keys {
        let record = store.read(&key).await?;
        rows.push(RecordRow {
            key,
            cloud: record.migration_target.cloud_type.clone(),
            state: record.migration.migration_state.clone(),
            target_ip: record.workload.target_machine.ip.clone(),
            mounts: record.migration.selected_mounts.len(),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::modern());

    println!("{}", table);

    Ok(())
}
