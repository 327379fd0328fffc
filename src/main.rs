//! Main entry point for the headless demo.
//!
//! Starts the actor system, creates a match of simulated players through the
//! match manager, plays it to the end, and prints the final state as JSON.

use actix::Actor;
use log::{info, warn};

use shootout::config::demo::{DEMO_ROSTER, MAX_SIMULATED_ACTIONS};
use shootout::config::game::{DEFAULT_ATTEMPTS, DEFAULT_BEST_OF};
use shootout::game::entities::simulated_roster;
use shootout::game::systems::{match_winner, player_by_id, round_wins, standings};
use shootout::game::Action;
use shootout::server::manager::{CreateMatch, GetMatch, MatchManager};
use shootout::server::messages::{Dispatch, GetGame};

#[actix::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manager = MatchManager::new().start();
    let match_id = manager
        .send(CreateMatch {
            players: simulated_roster(DEMO_ROSTER),
            attempts: DEFAULT_ATTEMPTS,
            best_of: DEFAULT_BEST_OF,
        })
        .await??;
    let session = manager.send(GetMatch { match_id }).await??;

    let mut state = session.send(GetGame).await?;
    let mut dispatched = 0;
    while !state.is_finished() && dispatched < MAX_SIMULATED_ACTIONS {
        state = session.send(Dispatch::new(Action::Simulate)).await??;
        dispatched += 1;
    }

    for round in &state.rounds {
        let line = standings(round)?
            .into_iter()
            .map(|(id, makes)| player_by_id(&state, &id).map(|p| format!("{} {}", p.name, makes)))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        info!("{}: {}", round.name, line);
    }

    match match_winner(&state)? {
        Some(player) => {
            let wins = round_wins(&state)
                .into_iter()
                .find(|(id, _)| *id == player.id)
                .map(|(_, wins)| wins)
                .unwrap_or(0);
            info!("{} wins the match with {} rounds after {} simulate actions", player.name, wins, dispatched);
        }
        None => warn!("No winner after {} simulate actions", dispatched),
    }

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
