//! Cooldown tracker engine.
//!
//! A pure state machine advanced by an external 1-second tick: it owns the
//! game clock and the per-role cooldown slots, expires entries, and derives
//! the sorted share summary. The scheduling mechanism (interval loop,
//! terminal rendering, clipboard) lives outside this module and only calls
//! the transition operations and read accessors defined here.

pub mod engine;
pub mod role;
pub mod state;
pub mod summary;

pub use engine::{Activation, StartOutcome, Tracker};
pub use role::Role;
pub use state::{CooldownEntry, CooldownState};
pub use summary::{ActiveCooldown, format_clock, format_compact, share_line};

/// Fixed cooldown window in game-clock seconds (5 minutes).
pub const COOLDOWN_SECS: u64 = 300;

/// Game-clock value at the moment the timer is started, representing the
/// pre-game lead time before minions spawn.
pub const START_OFFSET_SECS: u64 = 10;
