//! Centralized path configuration for convoy.
//!
//! All data paths go through this module so the daemon and the CLI agree on
//! where records and configuration live.

use std::path::PathBuf;

/// Get the convoy data directory.
///
/// Resolution order:
/// 1. `CONVOY_DATA_DIR` environment variable
/// 2. the current working directory
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CONVOY_DATA_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from(".")
}

/// Get the migration record storage root.
pub fn migrations_dir() -> PathBuf {
    data_dir().join("migrations")
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    data_dir().join("convoy.json")
}
