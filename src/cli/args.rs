//! CLI argument definitions
//!
//! All Clap derive structs for `spelltrack` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Interactive summoner-spell cooldown tracker.
#[derive(Parser, Debug)]
#[command(name = "spelltrack", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "SPELLTRACK_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive cooldown-tracking session.
    Track(TrackArgs),

    /// Validate configuration files without starting a session.
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Track Command
// ============================================================================

/// Arguments for `track`.
#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Path to YAML configuration file.
    #[arg(short, long, env = "SPELLTRACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable clipboard integration for this session.
    #[arg(long)]
    pub no_clipboard: bool,

    /// Override the tick interval (e.g. `1s`, `250ms`).
    #[arg(long, value_parser = humantime::parse_duration)]
    pub tick_interval: Option<std::time::Duration>,
}

// ============================================================================
// Validate Command
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_parses_bare() {
        let cli = Cli::try_parse_from(["spelltrack", "track"]);
        assert!(cli.is_ok(), "Failed to parse: {cli:?}");
    }

    #[test]
    fn test_track_with_config() {
        let cli = Cli::try_parse_from(["spelltrack", "track", "--config", "session.yaml"]).unwrap();
        let Commands::Track(args) = cli.command else {
            panic!("expected TrackArgs");
        };
        assert_eq!(args.config, Some(PathBuf::from("session.yaml")));
        assert!(!args.no_clipboard);
    }

    #[test]
    fn test_track_tick_interval_parses_humantime() {
        let cli =
            Cli::try_parse_from(["spelltrack", "track", "--tick-interval", "250ms"]).unwrap();
        let Commands::Track(args) = cli.command else {
            panic!("expected TrackArgs");
        };
        assert_eq!(args.tick_interval, Some(std::time::Duration::from_millis(250)));
    }

    #[test]
    fn test_track_bad_tick_interval_rejected() {
        let cli = Cli::try_parse_from(["spelltrack", "track", "--tick-interval", "often"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_validate_requires_files() {
        let result = Cli::try_parse_from(["spelltrack", "validate"]);
        assert!(result.is_err(), "Expected error for missing files");
    }

    #[test]
    fn test_help_output() {
        let result = Cli::try_parse_from(["spelltrack", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let result = Cli::try_parse_from(["spelltrack", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_color_choices_parse() {
        for variant in ["auto", "always", "never"] {
            let cli = Cli::try_parse_from(["spelltrack", "--color", variant, "track"]);
            assert!(cli.is_ok(), "Failed to parse color={variant}");
        }
    }

    #[test]
    fn test_completions_shells_parse() {
        for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
            let cli = Cli::try_parse_from(["spelltrack", "completions", shell]);
            assert!(cli.is_ok(), "Failed to parse shell={shell}");
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["spelltrack", "-vvv", "track"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::try_parse_from(["spelltrack", "--quiet", "track"]).unwrap();
        assert!(cli.quiet);
    }
}
