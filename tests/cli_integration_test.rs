//! CLI integration tests for the oil-exploration binary.

mod helpers;

use assert_cmd::Command;
use helpers::fixtures::{write_config, VALID_CONFIG};
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// Build a command for the binary with logs kept inside `dir`.
fn oil_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("oil-exploration").expect("binary should be built");
    cmd.current_dir(dir).env_remove("OIL_EXPLORATION_LOG_LEVEL");
    cmd
}

#[test]
fn test_check_valid_config() {
    let dir = TempDir::new().unwrap();
    let file = write_config(VALID_CONFIG);

    oil_cmd(dir.path())
        .args(["check"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("0.0.0.0:8080"));

    // default log file lands in the working directory
    assert!(dir.path().join("oil_exploration.log").exists());
}

#[test]
fn test_check_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_config(VALID_CONFIG);

    let output = oil_cmd(dir.path())
        .args(["--json", "--no-log-file", "check"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["valid"], true);
    assert_eq!(json["api_clients"], 2);
    assert_eq!(json["seismic_model"], "1.0.0");
}

#[test]
fn test_exit_codes_per_failure_kind() {
    let dir = TempDir::new().unwrap();

    oil_cmd(dir.path())
        .args(["--no-log-file", "check", "/nonexistent/config.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));

    let malformed = write_config("api: [unterminated\n");
    oil_cmd(dir.path())
        .args(["--no-log-file", "check"])
        .arg(malformed.path())
        .assert()
        .code(3);

    let invalid = write_config(&VALID_CONFIG.replace("path: /models/seismic", ""));
    oil_cmd(dir.path())
        .args(["--no-log-file", "check"])
        .arg(invalid.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("seismic_agent.path"));
}

#[test]
fn test_validation_error_json_lists_violations() {
    let dir = TempDir::new().unwrap();
    let invalid = write_config(&VALID_CONFIG.replace("path: /models/seismic", ""));

    let output = oil_cmd(dir.path())
        .args(["--json", "--no-log-file", "check"])
        .arg(invalid.path())
        .assert()
        .code(4)
        .get_output()
        .stderr
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["error"], "config_validation");
    assert_eq!(json["violations"][0]["path"], "seismic_agent.path");
    assert_eq!(json["violations"][0]["kind"], "missing");
}

#[test]
fn test_show_redacts_api_keys() {
    let dir = TempDir::new().unwrap();
    let file = write_config(VALID_CONFIG);

    oil_cmd(dir.path())
        .args(["--no-log-file", "show"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("client1"))
        .stdout(predicate::str::contains("abc123").not());
}

#[test]
fn test_invalid_log_level_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_config(VALID_CONFIG);

    oil_cmd(dir.path())
        .args(["--no-log-file", "--log-level", "loud", "check"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid log level"));
}
