//! Error types for convoy.
//!
//! All errors use `thiserror` for ergonomic error handling and proper error chains.
//! Errors carry structured context (offending field, key, reason); logging happens
//! at call sites, never inside error constructors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for convoy operations.
pub type Result<T> = std::result::Result<T, ConvoyError>;

/// Main error type for convoy.
#[derive(Error, Debug)]
pub enum ConvoyError {
    // Entity validation errors
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    // Migration engine errors
    #[error("Selected mounts do not include the system disk c:\\")]
    MissingSystemDisk,

    #[error("Migration for {source_ip} failed during transfer: {reason}")]
    ExecutionFailed { source_ip: String, reason: String },

    // Record store errors
    #[error("Migration record not found: {key}")]
    RecordNotFound { key: String },

    #[error("Corrupt migration record {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Generic errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConvoyError {
    /// Create a validation error for a named field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }
}
