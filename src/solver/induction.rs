//! Backward induction over the complete game tree.
//!
//! The traversal is exhaustive and depth-first: every move sequence reachable
//! from the empty board is visited exactly once, with actions explored in
//! ascending cell order. There is no pruning and no transposition table, since
//! the policy tables are keyed by move sequence rather than by board.

use std::time::Instant;

use super::{
    policy::{ActionDistribution, PolicyTables},
    stats::SolveStats,
};
use crate::{
    Error, Result,
    tictactoe::{GameState, Player},
};

/// Result of a full solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Utility of the starting history under optimal play
    pub value: i32,
    pub tables: PolicyTables,
    pub stats: SolveStats,
}

/// Traversal context threaded through the recursion.
///
/// Owns the policy tables being filled in; nothing outside the solver can
/// observe them until [`Solver::finish`] hands them back.
#[derive(Debug, Default)]
pub struct Solver {
    tables: PolicyTables,
    stats: SolveStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the minimax utility of `state`, recording the optimal action
    /// for every non-terminal history in its subtree.
    ///
    /// Terminal histories return their utility and record nothing. At a
    /// decision point the active player keeps the first action whose child
    /// utility strictly improves on the best seen so far (X minimizes, O
    /// maximizes) and the choice is stored as a one-hot distribution under
    /// the pre-action history.
    ///
    /// # Errors
    ///
    /// Move errors indicate a logic defect and abort the traversal.
    pub fn backward_induction(&mut self, state: &GameState) -> Result<i32> {
        self.stats.record_node(state);

        if state.is_terminal() {
            self.stats.record_terminal(state);
            return Ok(state.utility());
        }

        let history = state.key();
        let player = state
            .active_player()
            .ok_or_else(|| Error::NoActionsAvailable {
                history: history.to_string(),
            })?;
        let objective = player.objective();

        let mut best: Option<(usize, i32)> = None;
        for action in state.legal_actions() {
            let child = state.apply(action)?;
            let utility = self.backward_induction(&child)?;

            let improves = match best {
                None => true,
                Some((_, incumbent)) => objective.prefers(utility, incumbent),
            };
            if improves {
                best = Some((action, utility));
            }
        }

        let (action, utility) = best.ok_or_else(|| Error::NoActionsAvailable {
            history: history.to_string(),
        })?;

        self.tables
            .for_player_mut(player)
            .record(history, ActionDistribution::one_hot(action));
        self.stats.record_decision(player);

        Ok(utility)
    }

    pub fn tables(&self) -> &PolicyTables {
        &self.tables
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Hand the accumulated tables and statistics back to the caller.
    pub fn finish(self) -> (PolicyTables, SolveStats) {
        (self.tables, self.stats)
    }
}

/// Solve the game from the empty board.
pub fn solve() -> Result<Solution> {
    solve_from(&GameState::new())
}

/// Solve the subtree rooted at `state`.
///
/// Policy entries are produced only for histories extending `state`.
pub fn solve_from(state: &GameState) -> Result<Solution> {
    log::info!("solving from history '{}'", state.key());
    let started = Instant::now();

    let mut solver = Solver::new();
    let value = solver.backward_induction(state)?;
    let (tables, mut stats) = solver.finish();
    stats.elapsed = started.elapsed();

    log::info!("solved: value {value}, {stats}");
    log::debug!(
        "{:.0} nodes/s, nodes by depth {:?}",
        stats.nodes_per_second(),
        stats.nodes_by_depth
    );

    Ok(Solution {
        value,
        tables,
        stats,
    })
}

impl Solution {
    /// Number of decisions recorded for `player`
    pub fn player_entries(&self, player: Player) -> usize {
        self.tables.for_player(player).len()
    }
}
