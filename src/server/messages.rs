use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::{Action, EngineError, Game};

/// Apply one action to the match owned by a session.
/// Replies with the resulting state (unchanged for no-op actions).
#[derive(Message)]
#[rtype(result = "Result<Game, EngineError>")]
pub struct Dispatch {
    pub action: Action,
}

impl Dispatch {
    pub fn new(action: Action) -> Self {
        Self { action }
    }
}

/// Read the latest state of a session.
#[derive(Message)]
#[rtype(result = "Game")]
pub struct GetGame;

/// Pushed to subscribers whenever a dispatch changes the state.
#[derive(Message, Clone, Serialize, Deserialize, Debug)]
#[rtype(result = "()")]
pub struct MatchStateUpdate {
    pub match_id: Uuid,
    pub state: Game,
}

/// Register a recipient for `MatchStateUpdate`. It immediately receives the current state.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Subscribe(pub Recipient<MatchStateUpdate>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("match session {0} not found")]
    MatchNotFound(Uuid),
}
