//! Subcommand implementations for the convoy CLI.

pub mod ls;
pub mod rm;
pub mod run;
