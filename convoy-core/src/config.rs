//! Configuration management.

use crate::error::{ConvoyError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent configuration for convoy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory for migration records.
    pub storage_dir: String,
    /// Listen address for the daemon HTTP API.
    pub listen_addr: String,
    pub log_level: String,
    /// Duration of the simulated transfer, in milliseconds.
    pub transfer_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: paths::migrations_dir().to_string_lossy().to_string(),
            listen_addr: "127.0.0.1:7171".to_string(),
            log_level: "info".to_string(),
            transfer_delay_ms: 1_000,
        }
    }
}

impl Config {
    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        paths::config_path()
    }

    /// Load configuration from disk, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| ConvoyError::InvalidConfig {
            reason: format!("Failed to read config: {}", e),
        })?;
        serde_json::from_str(&content).map_err(|e| ConvoyError::InvalidConfig {
            reason: format!("Failed to parse config: {}", e),
        })
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConvoyError::Io { path: parent.to_path_buf(), source: e })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| ConvoyError::InvalidConfig {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(&path, content).map_err(|e| ConvoyError::Io { path, source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.storage_dir.ends_with("migrations"));
        assert_eq!(config.transfer_delay_ms, 1_000);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.storage_dir, config.storage_dir);
        assert_eq!(parsed.listen_addr, config.listen_addr);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: Config = serde_json::from_str(r#"{"listen_addr":"0.0.0.0:8080"}"#).unwrap();
        assert_eq!(parsed.listen_addr, "0.0.0.0:8080");
        assert_eq!(parsed.transfer_delay_ms, 1_000);
    }
}
