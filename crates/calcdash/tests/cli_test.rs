//! Integration tests for the `calcdash` CLI binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! client-side input rejection -- all without a running backend. Every
//! rejection case here must fail before any network request is attempted.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `calcdash` binary with env isolation.
///
/// Clears all `CALCDASH_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn calcdash_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("calcdash");
    cmd.env("HOME", "/tmp/calcdash-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/calcdash-cli-test-nonexistent")
        .env_remove("CALCDASH_SERVER")
        .env_remove("CALCDASH_OUTPUT")
        .env_remove("CALCDASH_TIMEOUT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = calcdash_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    calcdash_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("overview")
            .and(predicate::str::contains("greet"))
            .and(predicate::str::contains("fib"))
            .and(predicate::str::contains("stats")),
    );
}

#[test]
fn test_version_flag() {
    calcdash_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("calcdash"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    calcdash_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_invalid_shell() {
    calcdash_cmd()
        .args(["completions", "notashell"])
        .assert()
        .failure();
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_prints_toml_path() {
    calcdash_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_writes_file_once() {
    let dir = tempfile::tempdir().unwrap();

    calcdash_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    let config_file = dir.path().join("calcdash").join("config.toml");
    let contents = std::fs::read_to_string(&config_file).unwrap();
    assert!(contents.contains("http://localhost:8080"), "{contents}");

    // A second init must refuse to clobber the existing file.
    calcdash_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_show_reports_defaults() {
    calcdash_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("http://localhost:8080")
                .and(predicate::str::contains("timeout")),
        );
}

// ── Input rejection (no request issued) ─────────────────────────────

#[test]
fn test_greet_rejects_whitespace_only_name() {
    // An unroutable --server guarantees a network attempt would fail loudly
    // with a connection error; the validation error must win instead.
    let output = calcdash_cmd()
        .args(["--server", "http://192.0.2.1:1", "greet", "   "])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("name"), "missing field in output:\n{text}");
}

#[test]
fn test_fib_rejects_non_numeric_input() {
    let output = calcdash_cmd()
        .args(["--server", "http://192.0.2.1:1", "fib", "ten"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("not an integer"),
        "unexpected output:\n{text}"
    );
}

#[test]
fn test_fib_rejects_negative_input() {
    let output = calcdash_cmd()
        .args(["--server", "http://192.0.2.1:1", "fib", "--", "-3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_stats_rejects_non_numeric_token() {
    let output = calcdash_cmd()
        .args(["--server", "http://192.0.2.1:1", "stats", "1,x,3"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains('x'), "unexpected output:\n{text}");
}

#[test]
fn test_stats_rejects_empty_list() {
    let output = calcdash_cmd()
        .args(["--server", "http://192.0.2.1:1", "stats", " , , "])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_server_url_is_a_usage_error() {
    let output = calcdash_cmd()
        .args(["--server", "not a url", "overview"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_non_http_server_scheme_is_a_usage_error() {
    // Parses as a Url, but is not a usable http(s) origin.
    let output = calcdash_cmd()
        .args(["--server", "mailto:foo", "overview"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}
