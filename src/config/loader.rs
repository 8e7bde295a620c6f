//! Configuration loader.
//!
//! Loading pipeline: resolve the path (explicit flag, then the
//! `SPELLTRACK_CONFIG` environment variable, then built-in defaults) →
//! read → parse YAML → validate. A path that was asked for explicitly but
//! does not exist is an error; an absent implicit config silently falls
//! back to defaults.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::config::schema::{ClipboardMode, TrackConfig};
use crate::error::{ConfigError, Severity, ValidationIssue};
use crate::tracker::Role;

/// Environment variable naming the default configuration file.
pub const CONFIG_ENV: &str = "SPELLTRACK_CONFIG";

/// Tick intervals outside this range are rejected by validation.
const TICK_INTERVAL_RANGE: (Duration, Duration) =
    (Duration::from_millis(100), Duration::from_secs(10));

/// Loads the session configuration.
///
/// `explicit` is the `--config` flag value. Warnings are reported to the
/// caller alongside the config; validation errors fail the load.
///
/// # Errors
///
/// Returns [`ConfigError`] when an explicitly requested file is missing,
/// unreadable, unparseable, or invalid.
pub fn load(explicit: Option<&Path>) -> Result<(TrackConfig, Vec<ValidationIssue>), ConfigError> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return load_file(Path::new(&path));
    }

    debug!("no configuration file; using defaults");
    Ok((TrackConfig::default(), Vec::new()))
}

/// Loads and validates a single configuration file.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file is missing, unreadable,
/// unparseable, or fails validation.
pub fn load_file(path: &Path) -> Result<(TrackConfig, Vec<ValidationIssue>), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let config: TrackConfig =
        serde_yaml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let issues = validate(&config);
    let (errors, warnings): (Vec<_>, Vec<_>) = issues
        .into_iter()
        .partition(|issue| issue.severity == Severity::Error);

    if !errors.is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            errors,
        });
    }

    debug!(path = %path.display(), "configuration loaded");
    Ok((config, warnings))
}

/// Validates a configuration, returning every issue found.
#[must_use]
pub fn validate(config: &TrackConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    match config.clipboard.mode {
        ClipboardMode::Command => {
            let missing = config
                .clipboard
                .command
                .as_deref()
                .is_none_or(|c| c.trim().is_empty());
            if missing {
                issues.push(ValidationIssue {
                    path: "clipboard.command".to_string(),
                    message: "command required when mode is 'command'".to_string(),
                    severity: Severity::Error,
                });
            }
        }
        _ => {
            if config.clipboard.command.is_some() {
                issues.push(ValidationIssue {
                    path: "clipboard.command".to_string(),
                    message: "command is ignored unless mode is 'command'".to_string(),
                    severity: Severity::Warning,
                });
            }
        }
    }

    if let Some(raw) = config.tick_interval.as_deref() {
        match humantime::parse_duration(raw) {
            Ok(interval) => {
                let (min, max) = TICK_INTERVAL_RANGE;
                if interval < min || interval > max {
                    issues.push(ValidationIssue {
                        path: "tick_interval".to_string(),
                        message: format!(
                            "interval '{raw}' outside supported range \
                             ({}..={})",
                            humantime::format_duration(min),
                            humantime::format_duration(max)
                        ),
                        severity: Severity::Error,
                    });
                }
            }
            Err(e) => {
                issues.push(ValidationIssue {
                    path: "tick_interval".to_string(),
                    message: format!("not a duration: {e}"),
                    severity: Severity::Error,
                });
            }
        }
    }

    for role in Role::ALL {
        if config.labels.get(role).trim().is_empty() {
            issues.push(ValidationIssue {
                path: format!("labels.{role}"),
                message: "label is empty".to_string(),
                severity: Severity::Warning,
            });
        }
    }

    issues
}
