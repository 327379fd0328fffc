//! Game entities module.
//!
//! This module organizes player and round construction and per-round tallies.

pub mod player;
pub mod round;

pub use player::*;
pub use round::*;
