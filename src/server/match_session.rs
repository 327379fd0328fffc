use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::game::{reduce, EngineError, Game};
use crate::server::messages::{Dispatch, GetGame, MatchStateUpdate, Subscribe};

/// Single owner of one match's state.
pub struct MatchSession {
    pub match_id: Uuid,
    game: Game,
    subscribers: Vec<Recipient<MatchStateUpdate>>,
}

impl MatchSession {
    pub fn new(game: Game) -> Self {
        Self {
            match_id: game.id,
            game,
            subscribers: Vec::new(),
        }
    }

    pub fn send_state(&self) {
        debug!(
            "[MatchSession] Broadcast state: match_id={} round={} finished={} subscribers={}",
            self.match_id,
            self.game.active_round + 1,
            self.game.is_finished(),
            self.subscribers.len()
        );
        for recipient in &self.subscribers {
            recipient.do_send(MatchStateUpdate {
                match_id: self.match_id,
                state: self.game.clone(),
            });
        }
    }
}

impl Actor for MatchSession {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!("[MatchSession] Started match {}", self.match_id);
    }
}

impl Handler<Dispatch> for MatchSession {
    type Result = Result<Game, EngineError>;

    fn handle(&mut self, msg: Dispatch, _: &mut Context<Self>) -> Self::Result {
        let next = reduce(&self.game, &msg.action).map_err(|err| {
            warn!(
                "[MatchSession] Rejected {} on match {}: {} ({})",
                msg.action.name(),
                self.match_id,
                err,
                err.code()
            );
            err
        })?;

        if next != self.game {
            self.game = next;
            self.send_state();
        }
        Ok(self.game.clone())
    }
}

impl Handler<GetGame> for MatchSession {
    type Result = MessageResult<GetGame>;

    fn handle(&mut self, _: GetGame, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.game.clone())
    }
}

impl Handler<Subscribe> for MatchSession {
    type Result = ();

    fn handle(&mut self, msg: Subscribe, _: &mut Context<Self>) -> Self::Result {
        msg.0.do_send(MatchStateUpdate {
            match_id: self.match_id,
            state: self.game.clone(),
        });
        self.subscribers.push(msg.0);
    }
}
