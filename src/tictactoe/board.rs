//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::identifiers::HistoryKey;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

/// Direction in which a player pushes the utility value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Minimize,
    Maximize,
}

impl Objective {
    /// Whether `candidate` strictly improves on `incumbent`.
    ///
    /// Ties keep the incumbent, so the earliest action examined wins.
    pub fn prefers(self, candidate: i32, incumbent: i32) -> bool {
        match self {
            Objective::Minimize => candidate < incumbent,
            Objective::Maximize => candidate > incumbent,
        }
    }
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Player whose turn it is once `move_count` moves have been played.
    ///
    /// Returns `None` after the ninth move: the board is full and nobody moves.
    pub fn to_move_after(move_count: usize) -> Option<Player> {
        match move_count {
            n if n >= 9 => None,
            n if n % 2 == 0 => Some(Player::X),
            _ => Some(Player::O),
        }
    }

    /// Utility direction for this player.
    ///
    /// A win is scored relative to the player nominally to move at the
    /// terminal node, i.e. the one who did *not* complete the line. An X win
    /// therefore scores -10 and X minimizes; O maximizes.
    pub fn objective(self) -> Objective {
        match self {
            Player::X => Objective::Minimize,
            Player::O => Objective::Maximize,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Mark assignment for the nine cells, indexed row-major:
///
/// ```text
///  0 | 1 | 2
///  3 | 4 | 5
///  6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Replay `moves` from the empty board, X on even plies and O on odd plies.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for an index outside 0-8,
    /// [`crate::Error::InvalidMove`] when a move targets an occupied cell and
    /// [`crate::Error::GameOver`] when a move follows a completed line.
    pub fn for_moves(moves: &[usize]) -> Result<Board, crate::Error> {
        let mut board = Board::new();
        for (ply, &pos) in moves.iter().enumerate() {
            if board.is_win() {
                return Err(crate::Error::GameOver {
                    history: HistoryKey::from_moves(&moves[..ply]).into_inner(),
                });
            }
            let player = if ply % 2 == 0 { Player::X } else { Player::O };
            board.place(pos, player)?;
        }
        Ok(board)
    }

    /// Put `player`'s mark on `pos`.
    pub fn place(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }
        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Empty cells in ascending order.
    ///
    /// The ordering is what makes tie-breaking in the solver deterministic.
    pub fn legal_actions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Any row, column or diagonal holds three identical marks
    pub fn is_win(&self) -> bool {
        LineAnalyzer::has_complete_line(&self.cells)
    }

    /// Board is full and nobody has a line
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && !self.is_win()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_win() || self.is_draw()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if LineAnalyzer::has_won(&self.cells, Player::X) {
            Some(Player::X)
        } else if LineAnalyzer::has_won(&self.cells, Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert!(board.cells.iter().all(|&c| c == Cell::Empty));
        assert_eq!(board.legal_actions(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_for_moves_alternates_marks() {
        let board = Board::for_moves(&[4, 0, 8]).unwrap();
        assert_eq!(board.get(4), Cell::X);
        assert_eq!(board.get(0), Cell::O);
        assert_eq!(board.get(8), Cell::X);
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn test_for_moves_is_deterministic() {
        let moves = [0, 4, 2, 1, 7];
        assert_eq!(
            Board::for_moves(&moves).unwrap(),
            Board::for_moves(&moves).unwrap()
        );
    }

    #[test]
    fn test_for_moves_rejects_occupied_cell() {
        let err = Board::for_moves(&[0, 4, 0]).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidMove { position: 0 }));
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_for_moves_rejects_out_of_range() {
        let err = Board::for_moves(&[0, 9]).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidPosition { position: 9 }));
    }

    #[test]
    fn test_for_moves_rejects_move_after_win() {
        // X completes the left column on ply 5, then O tries to play on
        let err = Board::for_moves(&[0, 1, 3, 2, 6, 4]).unwrap_err();
        assert!(matches!(err, crate::Error::GameOver { ref history } if history == "01326"));
    }

    #[test]
    fn test_legal_actions_complement_ascending() {
        let board = Board::for_moves(&[8, 0, 4]).unwrap();
        assert_eq!(board.legal_actions(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_win_detection_column() {
        // X O O
        // X . .
        // X . .
        let board = Board::for_moves(&[0, 1, 3, 2, 6]).unwrap();
        assert!(board.is_win());
        assert!(!board.is_draw());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O O
        // O X X
        let board = Board::for_moves(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert!(!board.is_win());
        assert!(board.is_draw());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        // X X X
        // O O X
        // X O O
        let board = Board::for_moves(&[0, 3, 1, 4, 6, 7, 5, 8, 2]).unwrap();
        assert!(board.is_win());
        assert!(!board.is_draw());
    }

    #[test]
    fn test_objective_is_strict() {
        assert!(Objective::Minimize.prefers(-10, 0));
        assert!(!Objective::Minimize.prefers(0, 0));
        assert!(Objective::Maximize.prefers(10, 0));
        assert!(!Objective::Maximize.prefers(0, 0));
    }

    #[test]
    fn test_to_move_after() {
        assert_eq!(Player::to_move_after(0), Some(Player::X));
        assert_eq!(Player::to_move_after(1), Some(Player::O));
        assert_eq!(Player::to_move_after(8), Some(Player::X));
        assert_eq!(Player::to_move_after(9), None);
    }

    #[test]
    fn test_display() {
        let board = Board::for_moves(&[0, 4, 8]).unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }
}
