//! Share-summary derivation and time formatting.

use super::role::Role;
use super::state::CooldownState;

/// One row of the share summary: a role still on cooldown and the absolute
/// game-clock instant at which it becomes available again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCooldown {
    /// Role whose ability is cooling down.
    pub role: Role,
    /// Game-clock instant of availability.
    pub ready_at: u64,
}

impl ActiveCooldown {
    /// Compact zero-padded `MMSS` encoding of the availability instant.
    #[must_use]
    pub fn stamp(&self) -> String {
        format_compact(self.ready_at)
    }
}

/// Derives the share summary from the cooldown slots at game time `now`.
///
/// Only live entries (elapsed below the cooldown window) are included, so an
/// expired entry is never visible here even before the next tick clears it.
/// The result is sorted ascending by availability instant; the sort is
/// stable, so same-second activations keep canonical role order.
#[must_use]
pub fn derive(state: &CooldownState, now: u64) -> Vec<ActiveCooldown> {
    let mut cooldowns: Vec<ActiveCooldown> = state
        .iter()
        .filter(|(_, entry)| entry.is_live(now))
        .map(|(role, entry)| ActiveCooldown {
            role,
            ready_at: entry.ready_at(),
        })
        .collect();
    cooldowns.sort_by_key(|c| c.ready_at);
    cooldowns
}

/// Formats seconds as a zero-padded `MM:SS` clock.
#[must_use]
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Formats seconds as the compact `MMSS` encoding used in share summaries.
#[must_use]
pub fn format_compact(secs: u64) -> String {
    format!("{:02}{:02}", secs / 60, secs % 60)
}

/// Joins a summary into the shareable line of space-separated
/// `"role MMSS"` tokens, in the order given.
#[must_use]
pub fn share_line(cooldowns: &[ActiveCooldown]) -> String {
    cooldowns
        .iter()
        .map(|c| format!("{} {}", c.role.short_name(), c.stamp()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::state::CooldownEntry;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(10), "00:10");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(310), "05:10");
        assert_eq!(format_clock(3599), "59:59");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(90), "0130");
        assert_eq!(format_compact(125), "0205");
        assert_eq!(format_compact(310), "0510");
    }

    #[test]
    fn test_compact_past_an_hour_keeps_all_digits() {
        // Minutes are padded to two digits but not truncated.
        assert_eq!(format_compact(6000), "10000");
    }

    #[test]
    fn test_stamp() {
        let c = ActiveCooldown {
            role: Role::Top,
            ready_at: 310,
        };
        assert_eq!(c.stamp(), "0510");
    }

    #[test]
    fn test_share_line() {
        let cooldowns = [
            ActiveCooldown {
                role: Role::Top,
                ready_at: 310,
            },
            ActiveCooldown {
                role: Role::Jg,
                ready_at: 311,
            },
        ];
        assert_eq!(share_line(&cooldowns), "top 0510 jg 0511");
    }

    #[test]
    fn test_share_line_empty() {
        assert_eq!(share_line(&[]), "");
    }

    #[test]
    fn test_derive_sorts_by_ready_at() {
        let mut state = CooldownState::new();
        state.set(Role::Top, CooldownEntry::new(30));
        state.set(Role::Jg, CooldownEntry::new(10));
        state.set(Role::Sup, CooldownEntry::new(20));

        let roles: Vec<Role> = derive(&state, 40).iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![Role::Jg, Role::Sup, Role::Top]);
    }

    #[test]
    fn test_derive_skips_expired_entries() {
        let mut state = CooldownState::new();
        state.set(Role::Top, CooldownEntry::new(10));
        state.set(Role::Mid, CooldownEntry::new(100));

        // Top expired at 310; only mid remains
        let summary = derive(&state, 315);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].role, Role::Mid);
        assert_eq!(summary[0].ready_at, 400);
    }

    #[test]
    fn test_derive_ties_keep_canonical_order() {
        let mut state = CooldownState::new();
        state.set(Role::Sup, CooldownEntry::new(50));
        state.set(Role::Top, CooldownEntry::new(50));

        let roles: Vec<Role> = derive(&state, 50).iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![Role::Top, Role::Sup]);
    }

    mod properties {
        use proptest::prelude::*;

        use crate::tracker::Role;
        use crate::tracker::state::{CooldownEntry, CooldownState};
        use crate::tracker::summary::derive;

        proptest! {
            /// The summary is sorted ascending by availability instant for
            /// any activation pattern, observed at any point in the window.
            #[test]
            fn derive_is_sorted(
                activations in proptest::collection::vec(
                    (0usize..Role::COUNT, 0u64..10_000), 0..=Role::COUNT),
                offset in 0u64..400,
            ) {
                let mut state = CooldownState::new();
                let mut latest = 0u64;
                for (slot, at) in activations {
                    state.set(Role::ALL[slot], CooldownEntry::new(at));
                    latest = latest.max(at);
                }

                let summary = derive(&state, latest + offset);
                prop_assert!(summary.windows(2).all(|w| w[0].ready_at <= w[1].ready_at));
                // No expired entry ever leaks into the summary
                prop_assert!(summary.iter().all(|c| c.ready_at > latest + offset));
            }
        }
    }
}
