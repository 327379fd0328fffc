//! Actions accepted by the match reducer.
//!
//! Serialized the same way client messages are: `{"action": ..., "data": ...}`.

use serde::{Serialize, Deserialize};

use crate::config::game::{DEFAULT_ATTEMPTS, DEFAULT_BEST_OF};
use crate::game::types::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "lowercase")]
pub enum Action {
    /// Registers the roster and rules, then opens round 1.
    Start {
        players: Vec<Player>,
        attempts: usize,
        best_of: u32,
    },
    /// Controlled active player scored.
    Make,
    /// Controlled active player missed.
    Miss,
    /// Resolve every remaining attempt of the uncontrolled active player.
    Simulate,
}

impl Action {
    pub fn start(players: Vec<Player>, attempts: usize, best_of: u32) -> Self {
        Self::Start { players, attempts, best_of }
    }

    /// `start` with the default rules from `config::game`.
    pub fn start_default(players: Vec<Player>) -> Self {
        Self::start(players, DEFAULT_ATTEMPTS, DEFAULT_BEST_OF)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Start { .. } => "start",
            Action::Make => "make",
            Action::Miss => "miss",
            Action::Simulate => "simulate",
        }
    }
}
