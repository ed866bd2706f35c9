//! Keyed, file-backed persistence for migration records.
//!
//! One JSON document per record at `<root>/<dotted-ip-key>.json`. Writing a
//! record for a source IP that already has one overwrites it; key equality
//! on the filename is the uniqueness rule. The root directory is injected at
//! construction, never a process-wide constant.

use crate::error::{ConvoyError, Result};
use crate::record::{record_key, MigrationRecord};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

#[cfg(test)]
mod tests;

/// Outcome of a batch removal.
///
/// Keys that were absent are reported per key rather than failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveReport {
    pub removed: Vec<String>,
    pub missing: Vec<String>,
}

impl RemoveReport {
    pub fn all_removed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// File-backed record store over an injected root directory.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    /// Open a store rooted at `root`, creating the directory if missing.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| ConvoyError::Io { path: root.clone(), source: e })?;
        info!(root = %root.display(), "record store ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", record_key(key)))
    }

    /// List stored record keys, `.json` suffix stripped, sorted.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| ConvoyError::Io { path: self.root.clone(), source: e })?;

        let mut keys = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ConvoyError::Io { path: self.root.clone(), source: e })?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }

    /// Persist a record under the key derived from its source IP and return
    /// the key.
    ///
    /// Overwrites any existing record for the same IP; that is the defined
    /// behavior for re-submitting a source, not an error.
    #[instrument(skip(self, record), fields(source_ip = %record.source.source_ip))]
    pub async fn create(&self, record: &MigrationRecord) -> Result<String> {
        let key = record.key();
        self.write(&key, record).await?;
        info!(key, "record created");
        Ok(key)
    }

    /// Load and parse the record stored under `key`.
    #[instrument(skip(self))]
    pub async fn read(&self, key: &str) -> Result<MigrationRecord> {
        let path = self.record_path(key);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConvoyError::RecordNotFound { key: key.to_string() });
            }
            Err(e) => return Err(ConvoyError::Io { path, source: e }),
        };

        serde_json::from_str(&content).map_err(|e| ConvoyError::CorruptRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    /// Overwrite the record stored under an explicit key.
    #[instrument(skip(self, record))]
    pub async fn write(&self, key: &str, record: &MigrationRecord) -> Result<()> {
        let path = self.record_path(key);
        let content =
            serde_json::to_string_pretty(record).map_err(|e| ConvoyError::CorruptRecord {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        fs::write(&path, content).await.map_err(|e| ConvoyError::Io { path, source: e })
    }

    /// Delete records by key, best effort.
    ///
    /// Absent keys are collected in the report; they never abort the rest of
    /// the batch.
    #[instrument(skip(self, keys))]
    pub async fn remove<S: AsRef<str>>(&self, keys: &[S]) -> Result<RemoveReport> {
        let mut report = RemoveReport::default();
        for key in keys {
            let key = record_key(key.as_ref());
            let path = self.record_path(&key);
            match fs::remove_file(&path).await {
                Ok(()) => {
                    info!(key, "record removed");
                    report.removed.push(key);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!(key, "record does not exist");
                    report.missing.push(key);
                }
                Err(e) => return Err(ConvoyError::Io { path, source: e }),
            }
        }
        Ok(report)
    }
}
