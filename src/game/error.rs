//! Engine errors.
//!
//! Every variant is an invariant violation: the caller dispatched something the
//! current state does not allow (controls should have been disabled) or the
//! state itself is corrupted. Actions that simply do not apply to the active
//! player are not errors; the reducer returns the state unchanged for those.

use crate::game::types::{PlayerId, RoundId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("match has not been started")]
    NotStarted,

    #[error("match has already been started")]
    AlreadyStarted,

    #[error("cannot start a match without players")]
    EmptyRoster,

    #[error("attempts per round must be at least 1")]
    InvalidAttempts,

    #[error("best-of must be odd and at least 1, got {0}")]
    InvalidBestOf(u32),

    #[error("round {0} not found")]
    RoundNotFound(RoundId),

    #[error("active round index {0} is out of range")]
    RoundIndexOutOfRange(usize),

    #[error("active player index {0} is out of range")]
    ActivePlayerOutOfRange(usize),

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("player {0} has no pending attempt in the active round")]
    NoPendingAttempt(PlayerId),

    #[error("round {0} already has a winner")]
    RoundAlreadyDecided(RoundId),
}

impl EngineError {
    /// Stable code for logs and clients (e.g. "NO_PENDING_ATTEMPT").
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::NotStarted => "NOT_STARTED",
            EngineError::AlreadyStarted => "ALREADY_STARTED",
            EngineError::EmptyRoster => "EMPTY_ROSTER",
            EngineError::InvalidAttempts => "INVALID_ATTEMPTS",
            EngineError::InvalidBestOf(_) => "INVALID_BEST_OF",
            EngineError::RoundNotFound(_) => "ROUND_NOT_FOUND",
            EngineError::RoundIndexOutOfRange(_) => "ROUND_INDEX_OUT_OF_RANGE",
            EngineError::ActivePlayerOutOfRange(_) => "ACTIVE_PLAYER_OUT_OF_RANGE",
            EngineError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            EngineError::NoPendingAttempt(_) => "NO_PENDING_ATTEMPT",
            EngineError::RoundAlreadyDecided(_) => "ROUND_ALREADY_DECIDED",
        }
    }
}
