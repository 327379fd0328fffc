//! Match reducer.
//!
//! `reduce` takes the current match by reference and returns the next one.
//! The input is never touched: every transition works on an owned copy, so a
//! failed call leaves the caller's state exactly as it was.

use log::{debug, info};
use rand::Rng;

use crate::game::actions::Action;
use crate::game::error::EngineError;
use crate::game::systems::queries::active_player;
use crate::game::systems::rounds::{create_next_round, end_round};
use crate::game::systems::simulation::fill_pending;
use crate::game::types::{Attempt, Game, Player};

/// Apply `action` to `state`, drawing simulated attempts from the thread RNG.
pub fn reduce(state: &Game, action: &Action) -> Result<Game, EngineError> {
    reduce_with_rng(state, action, &mut rand::rng())
}

/// Apply `action` to `state` with an explicit random source.
pub fn reduce_with_rng<R: Rng>(
    state: &Game,
    action: &Action,
    rng: &mut R,
) -> Result<Game, EngineError> {
    match action {
        Action::Start { players, attempts, best_of } => start(state, players, *attempts, *best_of),
        Action::Make => record_attempt(state, Attempt::Make),
        Action::Miss => record_attempt(state, Attempt::Miss),
        Action::Simulate => simulate(state, rng),
    }
}

fn start(state: &Game, players: &[Player], attempts: usize, best_of: u32) -> Result<Game, EngineError> {
    if state.is_started() {
        return Err(EngineError::AlreadyStarted);
    }
    if players.is_empty() {
        return Err(EngineError::EmptyRoster);
    }
    if attempts == 0 {
        return Err(EngineError::InvalidAttempts);
    }
    if best_of == 0 || best_of % 2 == 0 {
        return Err(EngineError::InvalidBestOf(best_of));
    }

    let mut next = state.clone();
    next.players = players.to_vec();
    next.attempts = attempts;
    next.best_of = best_of;
    next.rounds.clear();
    next.winner = None;
    create_next_round(&mut next);

    info!(
        "[Reducer] Match {} started: players={} attempts={} best_of={}",
        next.id,
        next.players.len(),
        attempts,
        best_of
    );
    Ok(next)
}

/// Returns the active player when `action` applies to them, `None` for a no-op.
fn eligible_shooter<'a>(state: &'a Game, action: &str, wants_controlled: bool) -> Result<Option<&'a Player>, EngineError> {
    if state.is_finished() {
        debug!("[Reducer] Ignoring {}: match {} is over", action, state.id);
        return Ok(None);
    }

    let player = active_player(state)?;
    if player.controlled != wants_controlled {
        debug!(
            "[Reducer] Ignoring {}: {} (controlled={}) is up",
            action, player.name, player.controlled
        );
        return Ok(None);
    }

    Ok(Some(player))
}

fn record_attempt(state: &Game, outcome: Attempt) -> Result<Game, EngineError> {
    let label = if outcome.is_make() { "make" } else { "miss" };
    let player_id = match eligible_shooter(state, label, true)? {
        Some(player) => player.id,
        None => return Ok(state.clone()),
    };

    let mut next = state.clone();
    let index = next.active_round;
    let round = next
        .rounds
        .get_mut(index)
        .ok_or(EngineError::RoundIndexOutOfRange(index))?;
    let slots = round
        .attempts
        .get_mut(&player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    let slot = slots
        .iter_mut()
        .find(|a| a.is_pending())
        .ok_or(EngineError::NoPendingAttempt(player_id))?;
    *slot = outcome;
    let turn_over = !slots.iter().any(Attempt::is_pending);
    debug!("[Reducer] {} recorded {} for {}", round.name, label, player_id);

    // The shooter keeps the turn until their last slot is filled.
    if turn_over {
        end_round(&mut next)?;
    }
    Ok(next)
}

fn simulate<R: Rng>(state: &Game, rng: &mut R) -> Result<Game, EngineError> {
    let (player_id, percentage) = match eligible_shooter(state, "simulate", false)? {
        Some(player) => (player.id, player.percentage),
        None => return Ok(state.clone()),
    };

    let mut next = state.clone();
    let index = next.active_round;
    let round = next
        .rounds
        .get_mut(index)
        .ok_or(EngineError::RoundIndexOutOfRange(index))?;
    let slots = round
        .attempts
        .get_mut(&player_id)
        .ok_or(EngineError::PlayerNotFound(player_id))?;
    let filled = fill_pending(slots, percentage, rng);
    debug!("[Reducer] {} simulated {} attempts for {}", round.name, filled, player_id);

    end_round(&mut next)?;
    Ok(next)
}
