//! Policy tables produced by the solver

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    identifiers::HistoryKey,
    tictactoe::{GameState, Player},
};

/// Probability assigned to each of the nine cells at a decision point.
///
/// The solver only ever produces pure strategies, so every probability is
/// 0 or 1. Serialises as `{"0": 0, "1": 1, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionDistribution(BTreeMap<usize, u8>);

impl ActionDistribution {
    /// All mass on `action`, zero on the other eight cells.
    pub fn one_hot(action: usize) -> Self {
        Self((0..9).map(|cell| (cell, u8::from(cell == action))).collect())
    }

    pub fn probability(&self, action: usize) -> u8 {
        self.0.get(&action).copied().unwrap_or(0)
    }

    /// Lowest cell carrying probability 1
    pub fn best_action(&self) -> Option<usize> {
        self.0
            .iter()
            .find(|&(_, &p)| p == 1)
            .map(|(&cell, _)| cell)
    }

    /// Sum of all probabilities
    pub fn total(&self) -> u32 {
        self.0.values().map(|&p| u32::from(p)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0.iter().map(|(&cell, &p)| (cell, p))
    }
}

/// Mapping from history to the optimal action distribution for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyTable(BTreeMap<HistoryKey, ActionDistribution>);

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the decision for `key`, replacing any earlier entry.
    pub fn record(&mut self, key: HistoryKey, distribution: ActionDistribution) {
        self.0.insert(key, distribution);
    }

    pub fn get(&self, key: &str) -> Option<&ActionDistribution> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Optimal action recorded for `key`, if any
    pub fn best_action(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(ActionDistribution::best_action)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HistoryKey, &ActionDistribution)> {
        self.0.iter()
    }
}

/// The two player-indexed policy tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTables {
    /// Decisions for the first-moving player
    pub x: PolicyTable,
    /// Decisions for the second-moving player
    pub o: PolicyTable,
}

impl PolicyTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_player(&self, player: Player) -> &PolicyTable {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    pub fn for_player_mut(&mut self, player: Player) -> &mut PolicyTable {
        match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        }
    }

    /// Optimal action at `state` for whoever is to move there.
    ///
    /// Returns `None` for terminal states and unrecorded histories.
    pub fn best_action(&self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        let player = state.active_player()?;
        self.for_player(player).best_action(state.key().as_str())
    }

    /// Follow both tables from `state` until the game ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingPolicy`] if a non-terminal history on the way
    /// has no entry, or a move error if a table holds an illegal action.
    pub fn principal_line(&self, state: &GameState) -> Result<GameState> {
        let mut current = state.clone();
        while !current.is_terminal() {
            let action = self
                .best_action(&current)
                .ok_or_else(|| Error::MissingPolicy {
                    history: current.key().into_inner(),
                })?;
            current = current.apply(action)?;
        }
        Ok(current)
    }

    pub fn total_entries(&self) -> usize {
        self.x.len() + self.o.len()
    }
}
