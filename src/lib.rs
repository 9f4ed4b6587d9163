//! Optimal Tic-Tac-Toe policies by exhaustive backward induction
//!
//! This crate provides:
//! - Game-tree nodes derived purely from move histories
//! - A depth-first minimax solver that records a one-hot optimal action for
//!   every non-terminal history, one policy table per player
//! - Repository adapters for persisting the solved tables
//! - A thin CLI driver

pub mod adapters;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod solver;
pub mod tictactoe;

pub use error::{Error, Result};
pub use identifiers::HistoryKey;
pub use solver::{PolicyTables, Solution, solve};
pub use tictactoe::{Board, GameState, Player};
