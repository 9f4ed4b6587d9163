//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Check if any line holds three identical non-empty marks
    pub fn has_complete_line(cells: &[Cell; 9]) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line).is_some())
    }

    /// The player owning a complete line, if any
    pub fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
        let [a, b, c] = *line;
        if cells[a] == cells[b] && cells[b] == cells[c] {
            cells[a].to_player()
        } else {
            None
        }
    }
}
