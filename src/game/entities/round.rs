//! Round entity logic.
//!
//! Construction of fresh rounds and the read-only tallies the round-end
//! system relies on.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::game::types::{Attempt, PlayerId, Round};

impl Round {
    /// Open a round: every player gets `attempts` pending slots and the
    /// first player in `order` is up.
    pub fn new(number: usize, order: Vec<PlayerId>, attempts: usize) -> Self {
        let slots = order
            .iter()
            .map(|id| (*id, vec![Attempt::Pending; attempts]))
            .collect::<BTreeMap<_, _>>();

        Self {
            id: Uuid::new_v4(),
            name: format!("Round {}", number),
            order,
            attempts: slots,
            active_player: 0,
            winner: None,
        }
    }

    /// Id of the player whose turn it is.
    pub fn active_player_id(&self) -> Option<PlayerId> {
        self.order.get(self.active_player).copied()
    }

    pub fn makes(&self, player: &PlayerId) -> Option<usize> {
        self.attempts
            .get(player)
            .map(|slots| slots.iter().filter(|a| a.is_make()).count())
    }

    pub fn pending(&self, player: &PlayerId) -> Option<usize> {
        self.attempts
            .get(player)
            .map(|slots| slots.iter().filter(|a| a.is_pending()).count())
    }

    pub fn has_pending(&self) -> bool {
        self.attempts.values().flatten().any(Attempt::is_pending)
    }

    /// Length of the attempt sequences (ordinary attempts plus overtime slots).
    pub fn slot_count(&self) -> usize {
        self.attempts.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Players with the most makes, in turn order.
    /// Empty while any attempt is still pending.
    pub fn leaders(&self) -> Vec<PlayerId> {
        if self.has_pending() {
            return Vec::new();
        }

        let totals: Vec<(PlayerId, usize)> = self
            .order
            .iter()
            .map(|id| (*id, self.makes(id).unwrap_or(0)))
            .collect();

        let best = match totals.iter().map(|(_, makes)| *makes).max() {
            Some(best) => best,
            None => return Vec::new(),
        };

        totals
            .into_iter()
            .filter(|(_, makes)| *makes == best)
            .map(|(id, _)| id)
            .collect()
    }

    /// Append one pending slot for every player (sudden-death overtime).
    pub(crate) fn extend_overtime(&mut self) {
        for slots in self.attempts.values_mut() {
            slots.push(Attempt::Pending);
        }
    }

    pub(crate) fn advance_turn(&mut self) {
        if !self.order.is_empty() {
            self.active_player = (self.active_player + 1) % self.order.len();
        }
    }
}
