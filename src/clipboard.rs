//! System clipboard integration.
//!
//! The share summary is piped to an external clipboard writer's stdin.
//! Which writer runs is resolved from [`ClipboardConfig`]: an explicit
//! command, a probe over the well-known writers, or nothing at all. Failure
//! never touches tracker state; the session prints the summary for manual
//! copying instead.

use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::schema::{ClipboardConfig, ClipboardMode};
use crate::error::ClipboardError;

/// Well-known clipboard writers, probed in order under
/// [`ClipboardMode::Auto`].
const AUTO_WRITERS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["pbcopy"],
];

/// A resolved clipboard destination.
#[derive(Debug, Clone)]
pub struct Clipboard {
    /// Candidate argv lists, tried in order until one succeeds.
    candidates: Vec<Vec<String>>,
}

impl Clipboard {
    /// Resolves a clipboard from configuration.
    ///
    /// Returns `None` when the mode is `off`, so the caller can skip
    /// clipboard pushes entirely.
    #[must_use]
    pub fn from_config(config: &ClipboardConfig) -> Option<Self> {
        match config.mode {
            ClipboardMode::Off => None,
            ClipboardMode::Command => {
                let argv: Vec<String> = config
                    .command
                    .as_deref()
                    .unwrap_or_default()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
                (!argv.is_empty()).then(|| Self {
                    candidates: vec![argv],
                })
            }
            ClipboardMode::Auto => Some(Self {
                candidates: AUTO_WRITERS
                    .iter()
                    .map(|argv| argv.iter().map(|s| (*s).to_string()).collect())
                    .collect(),
            }),
        }
    }

    /// Copies `text` to the system clipboard.
    ///
    /// Candidates are tried in order; the first writer that accepts the text
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when every candidate fails to
    /// spawn, and [`ClipboardError::CommandFailed`] when a writer spawned
    /// but did not exit cleanly.
    pub async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_failure: Option<ClipboardError> = None;

        for argv in &self.candidates {
            match write_via(argv, text).await {
                Ok(()) => {
                    debug!(writer = %argv[0], "summary copied to clipboard");
                    return Ok(());
                }
                Err(e) => {
                    debug!(writer = %argv[0], error = %e, "clipboard writer failed");
                    last_failure = Some(e);
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::Unavailable))
    }
}

/// Spawns one writer and pipes `text` to its stdin.
async fn write_via(argv: &[String], text: &str) -> Result<(), ClipboardError> {
    let (program, args) = argv.split_first().ok_or(ClipboardError::Unavailable)?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| ClipboardError::Unavailable)?;

    let mut stdin = child.stdin.take().ok_or(ClipboardError::Unavailable)?;
    stdin
        .write_all(text.as_bytes())
        .await
        .map_err(|e| ClipboardError::CommandFailed {
            command: argv.join(" "),
            detail: e.to_string(),
        })?;
    drop(stdin);

    let status = child
        .wait()
        .await
        .map_err(|e| ClipboardError::CommandFailed {
            command: argv.join(" "),
            detail: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed {
            command: argv.join(" "),
            detail: status.to_string(),
        })
    }
}
