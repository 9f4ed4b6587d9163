//! Game-state invariants checked over the complete game tree

mod common;

use common::for_each_history;
use ttt_solver::tictactoe::{Board, Cell, GameState, Player, WINNING_LINES};

#[test]
fn legal_actions_are_the_ascending_complement_of_the_history() {
    for_each_history(|state| {
        if state.is_win() {
            return;
        }
        let actions = state.legal_actions();
        let expected: Vec<usize> = (0..9).filter(|c| !state.moves().contains(c)).collect();

        assert_eq!(actions, expected, "history {}", state.key());
        assert_eq!(actions.len(), 9 - state.moves().len());
    });
}

#[test]
fn board_is_a_pure_function_of_moves() {
    for_each_history(|state| {
        let replayed = Board::for_moves(state.moves()).expect("reachable history replays");
        assert_eq!(state.board(), &replayed);
        assert_eq!(Board::for_moves(state.moves()).unwrap(), replayed);
        assert_eq!(state.board().occupied_count(), state.moves().len());
    });
}

#[test]
fn active_player_follows_history_length() {
    for_each_history(|state| {
        let expected = match state.moves().len() {
            9 => None,
            n if n % 2 == 0 => Some(Player::X),
            _ => Some(Player::O),
        };
        assert_eq!(state.active_player(), expected);
    });
}

#[test]
fn win_and_draw_are_mutually_exclusive() {
    for_each_history(|state| {
        assert!(!(state.is_win() && state.is_draw()), "history {}", state.key());
        assert_eq!(state.is_terminal(), state.is_win() || state.is_draw());
        if state.is_draw() {
            assert_eq!(state.moves().len(), 9);
        }
    });
}

#[test]
fn every_line_wins_for_either_mark() {
    for line in WINNING_LINES {
        for mark in [Cell::X, Cell::O] {
            let mut board = Board::new();
            for idx in line {
                board.cells[idx] = mark;
            }
            assert!(board.is_win(), "line {line:?} with {mark:?}");
            assert!(!board.is_draw());
        }
    }
}

#[test]
fn two_marks_and_a_gap_is_not_a_win() {
    for line in WINNING_LINES {
        let mut board = Board::new();
        board.cells[line[0]] = Cell::X;
        board.cells[line[1]] = Cell::X;
        assert!(!board.is_win(), "line {line:?}");
    }
}

#[test]
fn apply_leaves_the_original_history_untouched() {
    let original = GameState::from_moves(vec![4, 0]).unwrap();
    let snapshot = original.clone();

    let children: Vec<GameState> = original
        .legal_actions()
        .into_iter()
        .map(|action| original.apply(action).unwrap())
        .collect();

    assert_eq!(original, snapshot);
    assert_eq!(children.len(), 7);
    for child in &children {
        assert_eq!(&child.moves()[..2], original.moves());
        assert_eq!(child.moves().len(), 3);
    }
}

#[test]
fn left_column_win_is_terminal() {
    // X O O
    // X . .
    // X . .
    let state = GameState::from_moves(vec![0, 1, 3, 2, 6]).unwrap();
    let board = state.board();

    assert_eq!(board.get(0), Cell::X);
    assert_eq!(board.get(3), Cell::X);
    assert_eq!(board.get(6), Cell::X);
    assert_eq!(board.get(1), Cell::O);
    assert_eq!(board.get(2), Cell::O);
    assert!(state.is_win());
    assert!(state.is_terminal());
    assert_eq!(state.winner(), Some(Player::X));
}

#[test]
fn terminal_histories_cannot_be_extended() {
    for_each_history(|state| {
        if !state.is_terminal() {
            return;
        }
        for cell in 0..9 {
            let err = state.apply(cell).unwrap_err();
            assert!(
                matches!(err, ttt_solver::Error::GameOver { .. }),
                "history {} accepted cell {cell}",
                state.key()
            );
        }
    });
}

#[test]
fn replaying_past_a_win_fails_fast() {
    let err = GameState::from_moves(vec![0, 1, 3, 2, 6, 4]).unwrap_err();
    assert!(matches!(err, ttt_solver::Error::GameOver { .. }));
}

#[test]
fn replaying_an_occupied_cell_fails_fast() {
    let err = GameState::from_moves(vec![0, 4, 4]).unwrap_err();
    assert!(matches!(err, ttt_solver::Error::InvalidMove { position: 4 }));

    let err = GameState::new().apply(12).unwrap_err();
    assert!(matches!(err, ttt_solver::Error::InvalidPosition { position: 12 }));
}
