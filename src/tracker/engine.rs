//! Tracker engine orchestration.
//!
//! The [`Tracker`] owns the game clock and the per-role cooldown slots and
//! exposes the state transitions (`start`, `restart`, `reset`, `tick`,
//! `activate`) plus the read accessors the presentation layer renders from.
//!
//! All operations are total: an out-of-state call is a defined no-op
//! reported through the returned enum, never a panic or error.

use tokio::time::Instant;
use tracing::{debug, info};

use super::START_OFFSET_SECS;
use super::role::Role;
use super::state::{CooldownEntry, CooldownState};
use super::summary::{self, ActiveCooldown};

/// Result of a [`Tracker::start`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The timer was idle and is now running.
    Started,
    /// The timer is already running; restarting discards all cooldown state
    /// and must be confirmed by the caller via [`Tracker::restart`].
    ConfirmationRequired,
}

/// Result of a [`Tracker::activate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A fresh cooldown entry was recorded.
    Applied {
        /// Game-clock instant at which the ability becomes available again.
        ready_at: u64,
    },
    /// The role already has a live cooldown; the existing entry is kept
    /// untouched (no reset, no extension).
    OnCooldown {
        /// Seconds left on the existing cooldown.
        remaining: u64,
    },
    /// The timer has not been started; nothing was recorded.
    NotStarted,
}

/// Timer lifecycle state.
///
/// The wall-clock start instant lives inside `Running` so the clock can only
/// be recomputed while the timer actually runs.
#[derive(Debug, Clone, Copy)]
enum TimerState {
    Idle,
    Running { started_at: Instant },
}

/// Cooldown tracker engine.
///
/// A pure state machine advanced by an external 1-second tick. The game
/// clock is recomputed from the recorded start instant on every tick
/// (`10 + floor(real_elapsed)`) rather than accumulated, so repeated ticks
/// never compound scheduler drift.
#[derive(Debug)]
pub struct Tracker {
    state: TimerState,
    game_time: u64,
    cooldowns: CooldownState,
}

impl Tracker {
    /// Creates an idle tracker with the clock at zero and every role
    /// available.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TimerState::Idle,
            game_time: 0,
            cooldowns: CooldownState::new(),
        }
    }

    /// Starts the timer.
    ///
    /// From idle, sets the game clock to the pre-game offset and records the
    /// wall-clock start instant. When already running this is a no-op that
    /// reports [`StartOutcome::ConfirmationRequired`]; the confirmed restart
    /// path is [`Tracker::restart`].
    pub fn start(&mut self) -> StartOutcome {
        if matches!(self.state, TimerState::Running { .. }) {
            debug!("start while running: restart needs confirmation");
            return StartOutcome::ConfirmationRequired;
        }

        self.game_time = START_OFFSET_SECS;
        self.state = TimerState::Running {
            started_at: Instant::now(),
        };
        info!(game_time = self.game_time, "timer started");
        StartOutcome::Started
    }

    /// Restarts the timer, discarding all cooldown state.
    ///
    /// This is the confirmed path for a `start` call that returned
    /// [`StartOutcome::ConfirmationRequired`]: the clock is cleared to zero
    /// together with every entry, then the timer starts again at the
    /// pre-game offset.
    pub fn restart(&mut self) {
        info!("timer restarted");
        self.reset();
        let _ = self.start();
    }

    /// Stops the timer and clears the clock and every cooldown entry.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.game_time = 0;
        self.cooldowns.clear_all();
        debug!("tracker reset");
    }

    /// Advances the game clock and expires finished cooldowns.
    ///
    /// Valid only while running (no-op otherwise). The clock is recomputed
    /// from the start instant, not incremented. Returns the roles whose
    /// entries expired on this evaluation so the caller can re-render.
    pub fn tick(&mut self) -> Vec<Role> {
        let TimerState::Running { started_at } = self.state else {
            return Vec::new();
        };

        self.game_time = START_OFFSET_SECS + started_at.elapsed().as_secs();

        let mut expired = Vec::new();
        for role in Role::ALL {
            if let Some(entry) = self.cooldowns.get(role) {
                if !entry.is_live(self.game_time) {
                    self.cooldowns.clear(role);
                    info!(role = %role, game_time = self.game_time, "cooldown expired");
                    expired.push(role);
                }
            }
        }
        expired
    }

    /// Records an activation for a role.
    ///
    /// When the timer is not running, nothing is recorded and the caller is
    /// told to start first. A role with a live cooldown keeps its existing
    /// entry untouched. Otherwise a fresh entry is pinned to the current
    /// game time.
    pub fn activate(&mut self, role: Role) -> Activation {
        if !self.is_running() {
            return Activation::NotStarted;
        }

        if let Some(entry) = self.cooldowns.live(role, self.game_time) {
            return Activation::OnCooldown {
                remaining: entry.remaining(self.game_time),
            };
        }

        let entry = CooldownEntry::new(self.game_time);
        self.cooldowns.set(role, entry);
        info!(role = %role, game_time = self.game_time, ready_at = entry.ready_at(), "flash marked");
        Activation::Applied {
            ready_at: entry.ready_at(),
        }
    }

    /// Whether the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Current game-clock value in seconds (zero while idle).
    #[must_use]
    pub const fn game_time(&self) -> u64 {
        self.game_time
    }

    /// Seconds left on a role's cooldown, or `None` when available.
    ///
    /// Expired entries are filtered here as well, so a consumer can never
    /// observe an "expired but still present" cooldown between ticks.
    #[must_use]
    pub fn remaining_cooldown(&self, role: Role) -> Option<u64> {
        self.cooldowns
            .live(role, self.game_time)
            .map(|entry| entry.remaining(self.game_time))
    }

    /// The share summary: every live cooldown with its availability instant,
    /// sorted ascending by that instant.
    #[must_use]
    pub fn active_cooldowns(&self) -> Vec<ActiveCooldown> {
        summary::derive(&self.cooldowns, self.game_time)
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}
