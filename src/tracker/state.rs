//! Per-role cooldown slots.
//!
//! Each role holds at most one [`CooldownEntry`]; absence means the ability
//! is available. Entries are created on activation, replaced wholesale on
//! re-activation after expiry, and cleared by the engine's evaluation pass.

use super::COOLDOWN_SECS;
use super::role::Role;

/// Record of a single activation, pinned to the game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownEntry {
    /// Game-clock value at the moment the ability was used.
    pub activated_at: u64,
}

impl CooldownEntry {
    /// Creates an entry activated at the given game-clock instant.
    #[must_use]
    pub const fn new(activated_at: u64) -> Self {
        Self { activated_at }
    }

    /// Seconds elapsed since activation at game time `now`.
    #[must_use]
    pub const fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.activated_at)
    }

    /// Whether the cooldown is still running at game time `now`.
    #[must_use]
    pub const fn is_live(&self, now: u64) -> bool {
        self.elapsed(now) < COOLDOWN_SECS
    }

    /// Seconds until the ability is available again at game time `now`.
    #[must_use]
    pub const fn remaining(&self, now: u64) -> u64 {
        COOLDOWN_SECS.saturating_sub(self.elapsed(now))
    }

    /// Absolute game-clock instant at which the ability becomes available.
    #[must_use]
    pub const fn ready_at(&self) -> u64 {
        self.activated_at + COOLDOWN_SECS
    }
}

/// Mapping from [`Role`] to its optional cooldown entry.
///
/// Exactly one slot per role; stored as a fixed array in canonical role
/// order so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CooldownState {
    slots: [Option<CooldownEntry>; Role::COUNT],
}

impl CooldownState {
    /// Creates an empty state with every role available.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; Role::COUNT],
        }
    }

    /// Returns the raw entry for a role, live or not.
    ///
    /// Consumers should normally go through [`CooldownState::live`] so an
    /// expired entry is never observable.
    #[must_use]
    pub const fn get(&self, role: Role) -> Option<CooldownEntry> {
        self.slots[role.index()]
    }

    /// Returns the entry for a role only while its cooldown is still
    /// running at game time `now`.
    #[must_use]
    pub fn live(&self, role: Role, now: u64) -> Option<CooldownEntry> {
        self.get(role).filter(|entry| entry.is_live(now))
    }

    /// Replaces the slot for a role with a fresh entry.
    pub const fn set(&mut self, role: Role, entry: CooldownEntry) {
        self.slots[role.index()] = Some(entry);
    }

    /// Clears the slot for a role.
    pub const fn clear(&mut self, role: Role) {
        self.slots[role.index()] = None;
    }

    /// Clears every slot.
    pub fn clear_all(&mut self) {
        self.slots = [None; Role::COUNT];
    }

    /// Iterates `(role, entry)` pairs for occupied slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, CooldownEntry)> + '_ {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|entry| (role, entry)))
    }
}
