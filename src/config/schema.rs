//! Configuration schema for the interactive session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tracker::Role;

/// Default tick interval: one evaluation per wall-clock second.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Top-level session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackConfig {
    /// Display names shown in status output.
    pub labels: RoleLabels,

    /// Clipboard integration settings.
    pub clipboard: ClipboardConfig,

    /// Tick interval as a humantime string (e.g. `1s`, `250ms`).
    ///
    /// `None` means the default of one second. Validated on load; see
    /// [`crate::config::loader::validate`].
    pub tick_interval: Option<String>,
}

impl TrackConfig {
    /// The effective tick interval.
    ///
    /// Falls back to the default when unset or unparseable (the loader
    /// rejects unparseable values, so the fallback only matters for
    /// hand-built configs).
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
            .as_deref()
            .and_then(|s| humantime::parse_duration(s).ok())
            .unwrap_or(DEFAULT_TICK_INTERVAL)
    }
}

/// Display names for the five roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoleLabels {
    /// Top lane label.
    pub top: String,
    /// Jungle label.
    pub jg: String,
    /// Mid lane label.
    pub mid: String,
    /// Bot-carry label.
    pub adc: String,
    /// Support label.
    pub sup: String,
}

impl RoleLabels {
    /// The label for a role.
    #[must_use]
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Top => &self.top,
            Role::Jg => &self.jg,
            Role::Mid => &self.mid,
            Role::Adc => &self.adc,
            Role::Sup => &self.sup,
        }
    }
}

impl Default for RoleLabels {
    fn default() -> Self {
        Self {
            top: Role::Top.default_label().to_string(),
            jg: Role::Jg.default_label().to_string(),
            mid: Role::Mid.default_label().to_string(),
            adc: Role::Adc.default_label().to_string(),
            sup: Role::Sup.default_label().to_string(),
        }
    }
}

/// Clipboard integration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardConfig {
    /// How the summary reaches the system clipboard.
    pub mode: ClipboardMode,

    /// Explicit writer command (whitespace-split into argv), required when
    /// `mode` is `command`.
    pub command: Option<String>,
}

/// Clipboard integration mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardMode {
    /// Probe the well-known writers (`wl-copy`, `xclip`, `xsel`, `pbcopy`).
    #[default]
    Auto,
    /// Use the configured `command` only.
    Command,
    /// Never touch the clipboard; the summary is printed for manual copy.
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackConfig::default();
        assert_eq!(config.labels.get(Role::Jg), "Jungle");
        assert_eq!(config.clipboard.mode, ClipboardMode::Auto);
        assert_eq!(config.clipboard.command, None);
        assert_eq!(config.tick_interval(), DEFAULT_TICK_INTERVAL);
    }

    #[test]
    fn test_empty_yaml_is_all_defaults() {
        let config: TrackConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.labels.get(Role::Top), "Top");
        assert_eq!(config.tick_interval(), DEFAULT_TICK_INTERVAL);
    }

    #[test]
    fn test_partial_labels_keep_defaults() {
        let config: TrackConfig = serde_yaml::from_str("labels:\n  jg: 정글\n").unwrap();
        assert_eq!(config.labels.get(Role::Jg), "정글");
        assert_eq!(config.labels.get(Role::Sup), "Support");
    }

    #[test]
    fn test_unknown_role_key_rejected() {
        let result: Result<TrackConfig, _> = serde_yaml::from_str("labels:\n  feeder: Who\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result: Result<TrackConfig, _> = serde_yaml::from_str("cooldown: 150\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_clipboard_modes_parse() {
        for (text, mode) in [
            ("auto", ClipboardMode::Auto),
            ("command", ClipboardMode::Command),
            ("\"off\"", ClipboardMode::Off),
        ] {
            let config: TrackConfig =
                serde_yaml::from_str(&format!("clipboard:\n  mode: {text}\n")).unwrap();
            assert_eq!(config.clipboard.mode, mode);
        }
    }

    #[test]
    fn test_tick_interval_parses_humantime() {
        let config: TrackConfig = serde_yaml::from_str("tick_interval: 250ms\n").unwrap();
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_bad_tick_interval_falls_back() {
        let config = TrackConfig {
            tick_interval: Some("often".to_string()),
            ..TrackConfig::default()
        };
        assert_eq!(config.tick_interval(), DEFAULT_TICK_INTERVAL);
    }
}
