//! Tic-Tac-Toe game representation

pub mod board;
pub mod lines;
pub mod state;

pub use board::{Board, Cell, Objective, Player};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use state::{DRAW_UTILITY, GameState, WIN_UTILITY};
