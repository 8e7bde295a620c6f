//! The fixed five-role set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five fixed team positions.
///
/// The set is closed and not user-extensible; declaration order is the
/// canonical iteration order and the tie-break order for the share summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Top lane
    Top,
    /// Jungle
    Jg,
    /// Mid lane
    Mid,
    /// Bot-lane carry
    Adc,
    /// Support
    Sup,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Self; 5] = [Self::Top, Self::Jg, Self::Mid, Self::Adc, Self::Sup];

    /// Number of roles.
    pub const COUNT: usize = 5;

    /// Short name used in commands and share-summary tokens.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Jg => "jg",
            Self::Mid => "mid",
            Self::Adc => "adc",
            Self::Sup => "sup",
        }
    }

    /// Default human-readable label for status output.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Jg => "Jungle",
            Self::Mid => "Mid",
            Self::Adc => "ADC",
            Self::Sup => "Support",
        }
    }

    /// Slot index into per-role storage.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Jg => 1,
            Self::Mid => 2,
            Self::Adc => 3,
            Self::Sup => 4,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Error for unrecognized role names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    /// Parses a role from its short name or a common alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "jg" | "jng" | "jungle" => Ok(Self::Jg),
            "mid" | "middle" => Ok(Self::Mid),
            "adc" | "bot" | "bottom" => Ok(Self::Adc),
            "sup" | "supp" | "support" => Ok(Self::Sup),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}
