/// Demo configuration constants.
/// 
/// Used by the headless binary that plays a full match of simulated players.

/// Players registered by the demo, as (name, percentage).
pub const DEMO_ROSTER: &[(&str, u8)] = &[
    ("Ava", 72),
    ("Ben", 65),
    ("Cleo", 80),
];

/// Safety cap on the number of `simulate` dispatches.
/// Two perfect shooters can tie forever in overtime.
pub const MAX_SIMULATED_ACTIONS: usize = 10_000;
