//! Migration domain types.

pub mod migration;
pub mod target;
pub mod workload;

pub use migration::{Migration, MigrationState, SYSTEM_DISK};
pub use target::{CloudType, MigrationTarget};
pub use workload::{Credentials, MountPoint, Source, Workload};
