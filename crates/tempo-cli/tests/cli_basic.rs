//! Basic CLI E2E tests.
//!
//! Each test gets its own data directory via TEMPO_DATA_DIR so runs never
//! touch real user data or each other.

use std::path::Path;
use std::process::Command;

fn run_cli(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "tempo-cli", "--quiet", "--"])
        .args(args)
        .env("TEMPO_DATA_DIR", dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn activity_list_shows_the_default_set() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["activity", "list"]);
    assert_eq!(code, 0);
    for id in ["gym", "study", "shower", "cycle", "course"] {
        assert!(stdout.contains(id), "missing '{id}' in: {stdout}");
    }
}

#[test]
fn timer_start_status_stop_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "start", "gym"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("session_started"));

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "status"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["type"], "snapshot");
    assert_eq!(snapshot["state"], "running");
    assert_eq!(snapshot["activity_id"], "gym");

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "stop"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("session_stopped"));

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "stop"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No session is running"));
}

#[test]
fn unknown_activity_fails_with_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["timer", "start", "nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("nope"));
}

#[test]
fn summary_renders_every_activity() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["summary", "--json"]);
    assert_eq!(code, 0);
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 5);
    assert_eq!(rows[0]["total_secs"], 0.0);
}

#[test]
fn reset_requires_confirmation() {
    let dir = tempfile::tempdir().unwrap();

    let (_, _, code) = run_cli(dir.path(), &["reset"]);
    assert_ne!(code, 0);

    run_cli(dir.path(), &["activity", "remove", "gym"]);
    let (stdout, _, code) = run_cli(dir.path(), &["reset", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Cleared 4 activities"));

    let (stdout, _, code) = run_cli(dir.path(), &["activity", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("gym"));
}
