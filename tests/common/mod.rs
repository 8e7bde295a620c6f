//! Shared integration-test harness for spawning the `spelltrack` binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the compiled `spelltrack` binary.
#[must_use]
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_spelltrack")
}

/// Runs the binary with the given arguments and collects its output.
#[must_use]
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .output()
        .expect("failed to run spelltrack")
}

/// Runs an interactive `track` session with scripted stdin.
///
/// Clipboard integration is disabled so the session prints share lines
/// instead of spawning writer processes. Stdin is closed after the script,
/// so a session without an explicit `quit` ends on EOF.
#[must_use]
pub fn run_session(input: &str, extra_args: &[&str]) -> Output {
    let mut child = Command::new(bin())
        .args(["track", "--no-clipboard"])
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn spelltrack");

    child
        .stdin
        .take()
        .expect("stdin not captured")
        .write_all(input.as_bytes())
        .expect("failed to write session script");

    child
        .wait_with_output()
        .expect("failed to wait for spelltrack")
}

/// Returns the path to a test fixture.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
