//! Game-tree node: a move history and everything derived from it

use std::fmt;

use super::board::{Board, Player};
use crate::identifiers::HistoryKey;

/// Utility of a win, scored for the player nominally to move at the end
pub const WIN_UTILITY: i32 = 10;
/// Utility of a drawn game
pub const DRAW_UTILITY: i32 = 0;

/// One node of the game tree.
///
/// The move history is the only source of truth; the board is derived from it
/// on construction and never mutated afterwards. Extending a state with
/// [`GameState::apply`] produces an independent value, so sibling branches of
/// a traversal never observe each other's moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    moves: Vec<usize>,
    board: Board,
}

impl GameState {
    /// Root of the game tree (empty board, X to move)
    pub fn new() -> Self {
        GameState {
            moves: Vec::new(),
            board: Board::new(),
        }
    }

    /// Build a state by replaying a move history.
    ///
    /// # Errors
    ///
    /// Returns an error if a move is out of range, repeats an occupied cell or
    /// follows a completed line.
    pub fn from_moves(moves: Vec<usize>) -> Result<Self, crate::Error> {
        let board = Board::for_moves(&moves)?;
        Ok(GameState { moves, board })
    }

    /// Build a state from a policy-table key.
    pub fn from_key(key: &HistoryKey) -> Result<Self, crate::Error> {
        Self::from_moves(key.moves())
    }

    /// Chronological move history from the empty board
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Key of this history in a policy table
    pub fn key(&self) -> HistoryKey {
        HistoryKey::from_moves(&self.moves)
    }

    /// Player to move; `None` once all nine cells are played
    pub fn active_player(&self) -> Option<Player> {
        Player::to_move_after(self.moves.len())
    }

    pub fn is_win(&self) -> bool {
        self.board.is_win()
    }

    pub fn is_draw(&self) -> bool {
        self.board.is_draw()
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    /// Empty cells in ascending order
    pub fn legal_actions(&self) -> Vec<usize> {
        self.board.legal_actions()
    }

    /// Game value of a terminal node.
    ///
    /// A win scores [`WIN_UTILITY`] when X is nominally to move at this node
    /// (O completed the line) and `-WIN_UTILITY` otherwise, which includes the
    /// ninth-move X win where nobody is left to move. Non-winning nodes score
    /// [`DRAW_UTILITY`].
    pub fn utility(&self) -> i32 {
        if !self.is_win() {
            return DRAW_UTILITY;
        }
        match self.active_player() {
            Some(Player::X) => WIN_UTILITY,
            _ => -WIN_UTILITY,
        }
    }

    /// Extend the history by one move, returning a new state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] on a terminal state,
    /// [`crate::Error::InvalidMove`] if the cell is occupied and
    /// [`crate::Error::InvalidPosition`] if it is outside 0-8.
    #[must_use = "apply returns a new state; the original is unchanged"]
    pub fn apply(&self, action: usize) -> Result<GameState, crate::Error> {
        let game_over = || crate::Error::GameOver {
            history: self.key().into_inner(),
        };
        if self.is_terminal() {
            return Err(game_over());
        }
        let player = self.active_player().ok_or_else(game_over)?;

        let mut board = self.board;
        board.place(action, player)?;

        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(action);

        Ok(GameState { moves, board })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
