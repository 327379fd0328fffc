use uuid::Uuid;

use crate::game::types::{Game, Player, Round};

impl Game {
    /// Creates an empty match: no roster, no rounds.
    /// The first `start` action fills it in.
    pub fn new() -> Self {
        Game {
            id: Uuid::new_v4(),
            players: Vec::new(),
            rounds: Vec::new(),
            winner: None,
            best_of: 0,
            attempts: 0,
            active_round: 0,
        }
    }

    pub fn is_started(&self) -> bool {
        !self.players.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of round wins needed to take the match.
    pub fn wins_needed(&self) -> u32 {
        self.best_of.div_ceil(2)
    }

    pub(crate) fn current_round(&self) -> Option<&Round> {
        self.rounds.get(self.active_round)
    }

    pub(crate) fn player(&self, id: &Uuid) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
