//! Traversal statistics.

use std::{fmt, time::Duration};

use serde::Serialize;

use crate::tictactoe::{GameState, Player};

/// Counters collected while walking the game tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Every history visited, terminal or not
    pub nodes: u64,
    /// Nodes visited at each history length 0..=9
    pub nodes_by_depth: [u64; 10],
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
    /// Policy entries written for X
    pub x_decisions: u64,
    /// Policy entries written for O
    pub o_decisions: u64,
    pub elapsed: Duration,
}

impl SolveStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_node(&mut self, state: &GameState) {
        self.nodes += 1;
        self.nodes_by_depth[state.moves().len()] += 1;
    }

    pub fn record_terminal(&mut self, state: &GameState) {
        match state.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn record_decision(&mut self, player: Player) {
        match player {
            Player::X => self.x_decisions += 1,
            Player::O => self.o_decisions += 1,
        }
    }

    pub fn terminal(&self) -> u64 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn decisions(&self) -> u64 {
        self.x_decisions + self.o_decisions
    }

    /// Nodes visited per second over the whole solve
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for SolveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} terminal (X {} / O {} / draw {}), {} decisions (X {} / O {}) in {:.2?}",
            self.nodes,
            self.terminal(),
            self.x_wins,
            self.o_wins,
            self.draws,
            self.decisions(),
            self.x_decisions,
            self.o_decisions,
            self.elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_outcomes_are_classified() {
        let mut stats = SolveStats::new();
        stats.record_terminal(&GameState::from_moves(vec![0, 1, 3, 2, 6]).unwrap());
        stats.record_terminal(&GameState::from_moves(vec![4, 0, 8, 1, 3, 2]).unwrap());
        stats.record_terminal(&GameState::from_moves(vec![0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap());

        assert_eq!((stats.x_wins, stats.o_wins, stats.draws), (1, 1, 1));
        assert_eq!(stats.terminal(), 3);
    }

    #[test]
    fn nodes_are_bucketed_by_depth() {
        let mut stats = SolveStats::new();
        stats.record_node(&GameState::new());
        stats.record_node(&GameState::from_moves(vec![4]).unwrap());
        stats.record_node(&GameState::from_moves(vec![0]).unwrap());

        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.nodes_by_depth[0], 1);
        assert_eq!(stats.nodes_by_depth[1], 2);
    }

    #[test]
    fn nodes_per_second_without_elapsed_time() {
        assert_eq!(SolveStats::new().nodes_per_second(), 0.0);
    }
}
