//! Match engine.
//!
//! Types, the reducer that advances a match one action at a time, and the
//! read-only queries used to display it.

pub mod types;
pub mod state;
pub mod actions;
pub mod error;

pub mod entities;
pub mod systems;

pub use actions::Action;
pub use error::EngineError;
pub use systems::{reduce, reduce_with_rng};
pub use types::{Attempt, Game, Player, PlayerId, Round, RoundId};
