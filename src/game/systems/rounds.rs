//! Round resolution system.
//!
//! Runs after every recorded attempt: rotates the turn while attempts remain,
//! extends a tied round into overtime, or settles the round and either closes
//! the match or moves play to the next round.

use log::{debug, info};

use crate::game::error::EngineError;
use crate::game::types::{Game, PlayerId, Round};

/// Evaluate the active round of `game` after an attempt was recorded.
pub fn end_round(game: &mut Game) -> Result<(), EngineError> {
    let index = game.active_round;
    let round = game
        .rounds
        .get_mut(index)
        .ok_or(EngineError::RoundIndexOutOfRange(index))?;

    let leaders = round.leaders();
    match leaders.as_slice() {
        [] => {
            round.advance_turn();
            debug!(
                "[Rounds] {} next shooter: index={} player={:?}",
                round.name,
                round.active_player,
                round.active_player_id()
            );
        }
        [winner] => {
            if round.winner.is_some() {
                return Err(EngineError::RoundAlreadyDecided(round.id));
            }
            round.winner = Some(*winner);
            info!("[Rounds] {} won by {}", round.name, winner);

            if let Some(match_champion) = champion(game) {
                game.winner = Some(match_champion);
                info!("[Rounds] Match {} won by {}", game.id, match_champion);
            } else {
                advance_round(game);
            }
        }
        tied => {
            round.extend_overtime();
            info!(
                "[Rounds] {} tied between {} players, overtime slot {}",
                round.name,
                tied.len(),
                round.slot_count()
            );
        }
    }

    Ok(())
}

/// Move play past a settled round: reuse its successor when one exists,
/// otherwise open a new one.
fn advance_round(game: &mut Game) {
    let next = game.active_round + 1;
    if let Some(round) = game.rounds.get_mut(next) {
        round.active_player = 0;
        game.active_round = next;
        debug!("[Rounds] Resuming existing {}", round.name);
    } else {
        create_next_round(game);
    }
}

/// Append a round and make it active.
/// Turn order is the previous round's order reversed; round 1 uses the roster order.
pub fn create_next_round(game: &mut Game) {
    let order: Vec<PlayerId> = match game.rounds.last() {
        Some(previous) => previous.order.iter().rev().copied().collect(),
        None => game.players.iter().map(|p| p.id).collect(),
    };

    let round = Round::new(game.rounds.len() + 1, order, game.attempts);
    debug!("[Rounds] Created {} order={:?}", round.name, round.order);
    game.rounds.push(round);
    game.active_round = game.rounds.len() - 1;
}

/// First player, in round order, whose tally reaches the majority.
pub fn champion(game: &Game) -> Option<PlayerId> {
    let needed = game.wins_needed();
    let mut tally: Vec<(PlayerId, u32)> = Vec::new();

    for winner in game.rounds.iter().filter_map(|r| r.winner) {
        let wins = match tally.iter_mut().find(|(id, _)| *id == winner) {
            Some((_, wins)) => {
                *wins += 1;
                *wins
            }
            None => {
                tally.push((winner, 1));
                1
            }
        };
        if wins >= needed {
            return Some(winner);
        }
    }

    None
}
