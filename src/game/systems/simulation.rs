//! Simulated attempts.
//!
//! Uncontrolled players shoot with a percentage-based draw. The random source
//! is passed in so matches can be replayed with a seeded generator.

use rand::Rng;

use crate::config::game::SIMULATION_DRAW_MAX;
use crate::game::types::Attempt;

/// Draw once in [0, 100]; a draw at or below `percentage` is a make.
pub fn roll_attempt<R: Rng>(percentage: u8, rng: &mut R) -> Attempt {
    let draw: f64 = rng.random_range(0.0..=SIMULATION_DRAW_MAX);
    if draw <= f64::from(percentage) {
        Attempt::Make
    } else {
        Attempt::Miss
    }
}

/// Resolve every pending slot in place. Returns how many slots were filled.
pub fn fill_pending<R: Rng>(slots: &mut [Attempt], percentage: u8, rng: &mut R) -> usize {
    let mut filled = 0;
    for slot in slots.iter_mut().filter(|a| a.is_pending()) {
        *slot = roll_attempt(percentage, rng);
        filled += 1;
    }
    filled
}
