mod common;

use common::{fixture_path, spawn_command};

#[test]
fn version_human() {
    let output = spawn_command(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("spelltrack"), "unexpected output: {stdout}");
}

#[test]
fn version_json() {
    let output = spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)
        .expect("version --format json should emit valid JSON");
    assert_eq!(parsed["name"], "spelltrack");
    assert!(parsed["version"].is_string());
}

#[test]
fn completions_bash() {
    let output = spawn_command(&["completions", "bash"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("spelltrack"),
        "completion script should mention the binary"
    );
}

#[test]
fn validate_valid_config() {
    let config = fixture_path("session.yaml");
    let output = spawn_command(&["validate", config.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "validate should succeed for valid config: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ok"), "unexpected report: {stdout}");
}

#[test]
fn validate_invalid_config() {
    let config = fixture_path("bad_interval.yaml");
    let output = spawn_command(&["validate", config.to_str().unwrap()]);
    assert!(
        !output.status.success(),
        "validate should fail for out-of-range tick interval"
    );
    assert_eq!(output.status.code(), Some(2), "config errors exit with 2");
}

#[test]
fn validate_broken_yaml() {
    let config = fixture_path("broken.yaml");
    let output = spawn_command(&["validate", config.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn validate_missing_file() {
    let output = spawn_command(&["validate", "/tmp/nonexistent_spelltrack_test_file.yaml"]);
    assert!(
        !output.status.success(),
        "validate should fail for nonexistent file"
    );
}

#[test]
fn validate_json_output() {
    let config = fixture_path("session.yaml");
    let output = spawn_command(&["validate", "--format", "json", config.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "validate --format json should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert!(parsed["files"].is_array(), "missing files array: {stdout}");
    assert_eq!(parsed["summary"]["failed"], 0);
}

#[test]
fn validate_warning_passes_unless_strict() {
    let config = fixture_path("ignored_command.yaml");

    let output = spawn_command(&["validate", config.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "warnings alone should not fail validation"
    );

    let output = spawn_command(&["validate", "--strict", config.to_str().unwrap()]);
    assert!(
        !output.status.success(),
        "--strict should turn warnings into failures"
    );
}

#[test]
fn unknown_subcommand_fails() {
    let output = spawn_command(&["conquer"]);
    assert!(!output.status.success());
}
