//! HTTP API for the convoy daemon.

mod server;

pub use server::serve;
