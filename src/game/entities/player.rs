use uuid::Uuid;

use crate::config::game::MAX_PERCENTAGE;
use crate::game::types::Player;

impl Player {
    /// Register a new player with a fresh id.
    /// The percentage is clamped to `MAX_PERCENTAGE`.
    pub fn new(name: impl Into<String>, percentage: u8, controlled: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            percentage: percentage.min(MAX_PERCENTAGE),
            controlled,
        }
    }

    /// Human-operated player.
    pub fn controlled(name: impl Into<String>, percentage: u8) -> Self {
        Self::new(name, percentage, true)
    }

    /// Player whose attempts are resolved by `simulate`.
    pub fn simulated(name: impl Into<String>, percentage: u8) -> Self {
        Self::new(name, percentage, false)
    }
}

/// Build a roster of simulated players from (name, percentage) pairs.
pub fn simulated_roster(entries: &[(&str, u8)]) -> Vec<Player> {
    entries
        .iter()
        .map(|(name, percentage)| Player::simulated(*name, *percentage))
        .collect()
}
