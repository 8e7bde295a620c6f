//! Interactive cooldown-tracking session
//!
//! Drives the tracker engine from a `tokio::select!` loop over a periodic
//! tick and newline-framed stdin commands. The engine owns all cooldown
//! state; this module only maps commands to engine calls, renders the
//! derived values, and pushes the share summary to the clipboard when the
//! active set changes.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_stream::{Stream, StreamExt};
use tokio_util::codec::{FramedRead, LinesCodec, LinesCodecError};
use tracing::{debug, warn};

use crate::cli::args::TrackArgs;
use crate::clipboard::Clipboard;
use crate::config::loader;
use crate::config::schema::{RoleLabels, TrackConfig};
use crate::error::SpelltrackError;
use crate::tracker::{Activation, Role, StartOutcome, Tracker, format_clock, share_line};

/// Session commands, parsed from one input line each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Activate(Role),
    Status,
    Copy,
    Reset,
    Help,
    Quit,
}

/// Command vocabulary used for parsing and did-you-mean suggestions.
const VOCABULARY: &[&str] = &[
    "start", "status", "copy", "reset", "help", "quit", "top", "jg", "mid", "adc", "sup",
];

impl Command {
    /// Parses a trimmed input line; the error carries the unknown token.
    fn parse(input: &str) -> Result<Self, String> {
        let token = input.to_ascii_lowercase();
        match token.as_str() {
            "start" | "go" => Ok(Self::Start),
            "status" | "st" | "list" => Ok(Self::Status),
            "copy" | "share" => Ok(Self::Copy),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => token
                .parse::<Role>()
                .map(Self::Activate)
                .map_err(|_| token),
        }
    }
}

/// Suggests the closest known command for an unrecognized token.
fn suggest(unknown: &str) -> Option<&'static str> {
    VOCABULARY
        .iter()
        .map(|candidate| (candidate, strsim::jaro_winkler(unknown, candidate)))
        .filter(|(_, score)| *score > 0.75)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(candidate, _)| *candidate)
}

/// Run the interactive session.
///
/// # Errors
///
/// Returns an error when the configuration fails to load or stdin breaks.
pub async fn run(args: &TrackArgs) -> Result<(), SpelltrackError> {
    let (config, warnings) = loader::load(args.config.as_deref())?;
    for warning in &warnings {
        warn!(location = %warning.path, "{}", warning.message);
    }

    let tick = args.tick_interval.unwrap_or_else(|| config.tick_interval());
    let clipboard = if args.no_clipboard {
        None
    } else {
        Clipboard::from_config(&config.clipboard)
    };

    let lines = FramedRead::new(tokio::io::stdin(), LinesCodec::new());
    let mut session = Session::new(&config, clipboard);
    session.run(lines, tick).await
}

/// Interactive session state: the tracker plus presentation concerns.
struct Session {
    tracker: Tracker,
    labels: RoleLabels,
    clipboard: Option<Clipboard>,
    /// Last share line pushed, to copy only when the active set changes.
    last_share: Option<String>,
    /// Set while a restart confirmation is pending; the next line answers it.
    pending_restart: bool,
}

impl Session {
    fn new(config: &TrackConfig, clipboard: Option<Clipboard>) -> Self {
        Self {
            tracker: Tracker::new(),
            labels: config.labels.clone(),
            clipboard,
            last_share: None,
            pending_restart: false,
        }
    }

    /// Main loop: one periodic tick, one stdin command at a time.
    async fn run<S>(&mut self, mut lines: S, tick: Duration) -> Result<(), SpelltrackError>
    where
        S: Stream<Item = Result<String, LinesCodecError>> + Unpin,
    {
        println!("spelltrack: type 'start' to begin, 'help' for commands");

        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = interval.tick() => self.on_tick().await,
                line = lines.next() => match line {
                    Some(Ok(line)) => {
                        if !self.handle_line(line.trim()).await {
                            break;
                        }
                    }
                    Some(Err(e)) => return Err(std::io::Error::other(e).into()),
                    None => break,
                },
            }
        }

        Ok(())
    }

    /// Advances the engine and announces expiries.
    async fn on_tick(&mut self) {
        let expired = self.tracker.tick();
        for role in &expired {
            println!("{} flash is back up", self.labels.get(*role));
        }
        if !expired.is_empty() {
            self.push_share(false).await;
        }
    }

    /// Handles one input line; returns `false` to end the session.
    async fn handle_line(&mut self, line: &str) -> bool {
        if line.is_empty() {
            return true;
        }

        if self.pending_restart {
            self.finish_restart(line);
            return true;
        }

        match Command::parse(line) {
            Ok(Command::Start) => self.on_start(),
            Ok(Command::Activate(role)) => self.on_activate(role).await,
            Ok(Command::Status) => self.on_status(),
            Ok(Command::Copy) => self.push_share(true).await,
            Ok(Command::Reset) => {
                self.tracker.reset();
                self.last_share = None;
                println!("tracker reset, clock stopped");
            }
            Ok(Command::Help) => print_help(),
            Ok(Command::Quit) => return false,
            Err(token) => match suggest(&token) {
                Some(candidate) => println!("unknown command '{token}', did you mean '{candidate}'?"),
                None => println!("unknown command '{token}', type 'help'"),
            },
        }
        true
    }

    fn on_start(&mut self) {
        match self.tracker.start() {
            StartOutcome::Started => {
                println!(
                    "game clock started at {}",
                    format_clock(self.tracker.game_time())
                );
            }
            StartOutcome::ConfirmationRequired => {
                self.pending_restart = true;
                println!("timer already running: restart and clear all cooldowns? [y/N]");
            }
        }
    }

    /// Consumes the answer line of a pending restart confirmation.
    fn finish_restart(&mut self, answer: &str) {
        self.pending_restart = false;
        if matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
            self.tracker.restart();
            self.last_share = None;
            println!(
                "restarted, all cooldowns cleared, clock at {}",
                format_clock(self.tracker.game_time())
            );
        } else {
            println!("restart cancelled");
        }
    }

    async fn on_activate(&mut self, role: Role) {
        match self.tracker.activate(role) {
            Activation::NotStarted => {
                println!("start the game clock first (type 'start')");
            }
            Activation::OnCooldown { remaining } => {
                println!(
                    "{} is still on cooldown for {}",
                    self.labels.get(role),
                    format_clock(remaining)
                );
            }
            Activation::Applied { ready_at } => {
                println!(
                    "{} flash marked, back at {}",
                    self.labels.get(role),
                    format_clock(ready_at)
                );
                self.push_share(false).await;
            }
        }
    }

    fn on_status(&self) {
        if !self.tracker.is_running() {
            println!("clock idle (type 'start')");
            return;
        }

        println!("game clock {}", format_clock(self.tracker.game_time()));
        for role in Role::ALL {
            let state = self
                .tracker
                .remaining_cooldown(role)
                .map_or_else(|| "ready".to_string(), format_clock);
            println!("  {:<8} {state}", self.labels.get(role));
        }

        let summary = self.tracker.active_cooldowns();
        if !summary.is_empty() {
            println!("share: {}", share_line(&summary));
        }
    }

    /// Pushes the share line to the clipboard.
    ///
    /// Unless forced, only acts when the line differs from the last push, so
    /// the writer process is not spawned on every tick.
    async fn push_share(&mut self, force: bool) {
        let line = share_line(&self.tracker.active_cooldowns());

        if !force && self.last_share.as_deref() == Some(line.as_str()) {
            return;
        }
        if force && line.is_empty() {
            println!("no active cooldowns");
            return;
        }

        if let Some(clipboard) = &self.clipboard {
            match clipboard.copy(&line).await {
                Ok(()) => {
                    if !line.is_empty() {
                        println!("copied: {line}");
                    }
                }
                Err(e) => {
                    debug!(error = %e, "clipboard push failed");
                    if !line.is_empty() {
                        println!("copy manually: {line}");
                    }
                }
            }
        } else if !line.is_empty() {
            println!("share: {line}");
        }

        self.last_share = Some(line);
    }
}

fn print_help() {
    println!("commands:");
    println!("  start              start the game clock (again: restart with confirmation)");
    println!("  top|jg|mid|adc|sup mark that role's flash as used");
    println!("  status             show the clock and every cooldown");
    println!("  copy               copy the share summary to the clipboard");
    println!("  reset              stop the clock and clear everything");
    println!("  quit               leave");
}
