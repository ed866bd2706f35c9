//! Convoy Core Library
//!
//! Shared types, engine, serialization and persistence for the convoy
//! workload migration tracker.

pub mod config;
pub mod engine;
pub mod error;
pub mod observability;
pub mod paths;
pub mod record;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use config::Config;
pub use engine::{MigrationEngine, SimulatedTransfer, TransferExecutor};
pub use error::{ConvoyError, Result};
pub use observability::init as init_observability;
pub use record::{pack, record_key, unpack, MigrationPlan, MigrationRecord};
pub use store::{RecordStore, RemoveReport};
pub use types::{
    CloudType, Credentials, Migration, MigrationState, MigrationTarget, MountPoint, Source,
    Workload, SYSTEM_DISK,
};
