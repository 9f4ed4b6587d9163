//! CLI infrastructure for the solver binary
//!
//! The binary is a thin driver: it runs the solve, reports statistics and
//! hands the policy tables to a repository adapter.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
