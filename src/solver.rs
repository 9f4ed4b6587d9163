//! Exhaustive backward-induction solver
//!
//! This module provides:
//! - [`Solver`], the recursive traversal context
//! - [`PolicyTables`], the two player-indexed policy tables it fills in
//! - [`SolveStats`], counters gathered along the way

pub mod induction;
pub mod policy;
pub mod stats;

pub use induction::{Solution, Solver, solve, solve_from};
pub use policy::{ActionDistribution, PolicyTable, PolicyTables};
pub use stats::SolveStats;
