/// Match configuration constants.
/// 
/// This module defines the default rules used when a caller does not supply
/// its own attempt and best-of counts.
pub const DEFAULT_ATTEMPTS: usize = 5; // Attempts per player in an ordinary round.

/// Number of rounds in a default match. Must be odd so a majority exists.
pub const DEFAULT_BEST_OF: u32 = 3;

/// Upper bound of a player's skill percentage.
pub const MAX_PERCENTAGE: u8 = 100;

/// Upper bound of the uniform draw used for a simulated attempt.
/// A draw at or below the player's percentage counts as a make.
pub const SIMULATION_DRAW_MAX: f64 = 100.0;
