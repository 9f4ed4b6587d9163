//! Common test utilities shared by the integration suites.

#![allow(dead_code)]

use std::sync::OnceLock;

use ttt_solver::{Solution, tictactoe::GameState};

/// Full solve from the empty board, computed once per test binary.
pub fn solution() -> &'static Solution {
    static SOLUTION: OnceLock<Solution> = OnceLock::new();
    SOLUTION.get_or_init(|| ttt_solver::solve().expect("full solve should succeed"))
}

/// Visit every history reachable from the empty board, depth-first with
/// actions in ascending order.
pub fn for_each_history(mut visit: impl FnMut(&GameState)) {
    fn walk(state: &GameState, visit: &mut dyn FnMut(&GameState)) {
        visit(state);
        if state.is_terminal() {
            return;
        }
        for action in state.legal_actions() {
            let child = state.apply(action).expect("legal action should apply");
            walk(&child, visit);
        }
    }

    walk(&GameState::new(), &mut visit);
}
