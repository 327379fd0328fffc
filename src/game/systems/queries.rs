//! Read-only views over a match.
//!
//! A missing id or index means the state is corrupted, so lookups return an
//! error instead of an empty value.

use serde::{Serialize, Deserialize};

use crate::game::error::EngineError;
use crate::game::types::{Game, Player, PlayerId, Round, RoundId};

/// Which controls the presentation layer should enable for the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Controls {
    /// `make` and `miss` are accepted.
    pub shoot: bool,
    /// `simulate` is accepted.
    pub simulate: bool,
}

pub fn round_by_id<'a>(game: &'a Game, id: &RoundId) -> Result<&'a Round, EngineError> {
    game.rounds
        .iter()
        .find(|r| r.id == *id)
        .ok_or(EngineError::RoundNotFound(*id))
}

pub fn active_round(game: &Game) -> Result<&Round, EngineError> {
    if !game.is_started() {
        return Err(EngineError::NotStarted);
    }
    game.current_round()
        .ok_or(EngineError::RoundIndexOutOfRange(game.active_round))
}

pub fn player_by_id<'a>(game: &'a Game, id: &PlayerId) -> Result<&'a Player, EngineError> {
    game.player(id).ok_or(EngineError::PlayerNotFound(*id))
}

/// The player whose turn it is in the active round.
pub fn active_player(game: &Game) -> Result<&Player, EngineError> {
    let round = active_round(game)?;
    let id = round
        .active_player_id()
        .ok_or(EngineError::ActivePlayerOutOfRange(round.active_player))?;
    player_by_id(game, &id)
}

/// Configured attempts per ordinary round. Slots past this index are overtime.
pub fn total_attempts(game: &Game) -> usize {
    game.attempts
}

pub fn is_overtime(game: &Game, round: &Round) -> bool {
    round.slot_count() > total_attempts(game)
}

pub fn match_winner(game: &Game) -> Result<Option<&Player>, EngineError> {
    game.winner.as_ref().map(|id| player_by_id(game, id)).transpose()
}

/// Round wins per player, in roster order.
pub fn round_wins(game: &Game) -> Vec<(PlayerId, u32)> {
    game.players
        .iter()
        .map(|p| {
            let wins = game.rounds.iter().filter(|r| r.winner == Some(p.id)).count() as u32;
            (p.id, wins)
        })
        .collect()
}

pub fn round_makes(round: &Round, id: &PlayerId) -> Result<usize, EngineError> {
    round.makes(id).ok_or(EngineError::PlayerNotFound(*id))
}

/// Makes per player for one round, in that round's turn order.
pub fn standings(round: &Round) -> Result<Vec<(PlayerId, usize)>, EngineError> {
    round.order
        .iter()
        .map(|id| round_makes(round, id).map(|makes| (*id, makes)))
        .collect()
}

/// Remaining slots of the active player in the active round.
pub fn pending_attempts(game: &Game) -> Result<usize, EngineError> {
    let round = active_round(game)?;
    let player = active_player(game)?;
    round.pending(&player.id).ok_or(EngineError::PlayerNotFound(player.id))
}

pub fn controls(game: &Game) -> Result<Controls, EngineError> {
    if !game.is_started() || game.is_finished() {
        return Ok(Controls::default());
    }

    let player = active_player(game)?;
    let has_pending = pending_attempts(game)? > 0;
    Ok(Controls {
        shoot: player.controlled && has_pending,
        simulate: !player.controlled && has_pending,
    })
}
