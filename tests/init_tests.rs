//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{dayline_cmd, journal_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    dayline_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".dayline/store").is_dir());

    let config_path = temp.path().join(".dayline/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("export_dir = \"exports\""));
    assert!(content.contains("created"));
    assert!(!content.contains("utc_offset_minutes"));
}

#[test]
fn test_init_with_offset() {
    let temp = TempDir::new().unwrap();

    dayline_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--utc-offset")
        .arg("-300")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".dayline/config.toml")).unwrap();
    assert!(content.contains("utc_offset_minutes = -300"));
}

#[test]
fn test_init_rejects_out_of_range_offset() {
    let temp = TempDir::new().unwrap();

    dayline_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--utc-offset")
        .arg("5000")
        .assert()
        .failure();

    assert!(!temp.path().join(".dayline").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    dayline_cmd().arg("init").arg(temp.path()).assert().success();
    dayline_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_command_outside_journal_fails_with_exit_code_2() {
    let temp = TempDir::new().unwrap();

    journal_cmd(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("dayline init"));
}

#[test]
fn test_dayline_root_env_var() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    dayline_cmd().arg("init").arg(temp.path()).assert().success();

    dayline_cmd()
        .current_dir(elsewhere.path())
        .env("DAYLINE_ROOT", temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_discovers_journal_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    dayline_cmd().arg("init").arg(temp.path()).assert().success();
    let nested = temp.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    journal_cmd(&nested).arg("list").assert().success();
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    dayline_cmd().arg("init").arg(temp.path()).assert().success();

    journal_cmd(temp.path())
        .args(["config", "export_dir"])
        .assert()
        .success()
        .stdout("exports\n");

    journal_cmd(temp.path())
        .args(["config", "export_dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set export_dir = out"));

    journal_cmd(temp.path())
        .args(["config", "utc_offset_minutes", "-120"])
        .assert()
        .success();

    journal_cmd(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export_dir = out"))
        .stdout(predicate::str::contains("utc_offset_minutes = -120"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_rejects_unknown_and_read_only_keys() {
    let temp = TempDir::new().unwrap();
    dayline_cmd().arg("init").arg(temp.path()).assert().success();

    journal_cmd(temp.path())
        .args(["config", "color", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    journal_cmd(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}
