//! Subcommand implementations

pub mod lookup;
pub mod solve;
