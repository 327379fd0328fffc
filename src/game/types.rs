use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Unique identifier for a player (stable for the whole match).
pub type PlayerId = Uuid;

/// Unique identifier for a round.
pub type RoundId = Uuid;

/// Outcome of a single attempt slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attempt {
    Make,
    Miss,
    Pending,
}

impl Attempt {
    pub fn is_pending(&self) -> bool {
        matches!(self, Attempt::Pending)
    }

    pub fn is_make(&self) -> bool {
        matches!(self, Attempt::Make)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Skill used by simulated attempts only (0..=100).
    pub percentage: u8,
    /// Human-operated players shoot with `make`/`miss`; others are simulated.
    pub controlled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub name: String,
    /// Turn order for this round.
    pub order: Vec<PlayerId>,
    pub attempts: BTreeMap<PlayerId, Vec<Attempt>>,
    /// Index into `order`.
    pub active_player: usize,
    pub winner: Option<PlayerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub players: Vec<Player>,
    pub rounds: Vec<Round>,
    pub winner: Option<PlayerId>,
    pub best_of: u32,
    /// Attempts per player in an ordinary (non-overtime) round.
    pub attempts: usize,
    /// Index into `rounds`.
    pub active_round: usize,
}
