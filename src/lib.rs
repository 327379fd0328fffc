//! Multi-round shooting contest engine.
//!
//! `game` holds the pure match reducer and its queries, `server` the actors
//! that own a match's state in-process, and `config` the default rules.

pub mod config;
pub mod game;
pub mod server;
