// src/server/mod.rs

//! In-process session layer.
//!
//! The engine is a pure function; something still has to own the latest state
//! of each match and apply actions one at a time. That owner is an actor:
//! - `match_session`: one actor per match, serializing dispatches through its mailbox
//! - `manager`: registry that creates and looks up match sessions
//! - `messages`: the messages both actors exchange with callers

pub mod messages;
pub mod match_session;
pub mod manager;
