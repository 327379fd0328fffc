use std::collections::HashMap;

use actix::prelude::*;
use actix::MessageResult;
use log::info;
use uuid::Uuid;

use crate::game::{reduce, Action, EngineError, Game, Player};
use crate::server::match_session::MatchSession;
use crate::server::messages::SessionError;

/// Registry of running match sessions.
pub struct MatchManager {
    sessions: HashMap<Uuid, Addr<MatchSession>>,
}

/// Start a match and spawn its session. Replies with the match id.
#[derive(Message)]
#[rtype(result = "Result<Uuid, EngineError>")]
pub struct CreateMatch {
    pub players: Vec<Player>,
    pub attempts: usize,
    pub best_of: u32,
}

#[derive(Message)]
#[rtype(result = "Result<Addr<MatchSession>, SessionError>")]
pub struct GetMatch {
    pub match_id: Uuid,
}

/// Drop a session from the registry. Replies `true` if it existed.
#[derive(Message)]
#[rtype(result = "bool")]
pub struct CloseMatch {
    pub match_id: Uuid,
}

impl MatchManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_match(&mut self, players: Vec<Player>, attempts: usize, best_of: u32) -> Result<Uuid, EngineError> {
        let game = reduce(&Game::new(), &Action::start(players, attempts, best_of))?;
        let match_id = game.id;

        let session = MatchSession::new(game).start();
        self.sessions.insert(match_id, session);
        info!("[MatchManager] Created match {} ({} running)", match_id, self.sessions.len());
        Ok(match_id)
    }
}

impl Default for MatchManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for MatchManager {
    type Context = Context<Self>;
}

impl Handler<CreateMatch> for MatchManager {
    type Result = Result<Uuid, EngineError>;

    fn handle(&mut self, msg: CreateMatch, _: &mut Context<Self>) -> Self::Result {
        self.create_match(msg.players, msg.attempts, msg.best_of)
    }
}

impl Handler<GetMatch> for MatchManager {
    type Result = Result<Addr<MatchSession>, SessionError>;

    fn handle(&mut self, msg: GetMatch, _: &mut Context<Self>) -> Self::Result {
        self.sessions.get(&msg.match_id)
            .cloned()
            .ok_or(SessionError::MatchNotFound(msg.match_id))
    }
}

impl Handler<CloseMatch> for MatchManager {
    type Result = MessageResult<CloseMatch>;

    fn handle(&mut self, msg: CloseMatch, _: &mut Context<Self>) -> Self::Result {
        let existed = self.sessions.remove(&msg.match_id).is_some();
        if existed {
            info!("[MatchManager] Closed match {}", msg.match_id);
        }
        MessageResult(existed)
    }
}
