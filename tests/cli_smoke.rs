#![allow(clippy::unwrap_used)]
//! CLI smoke tests for argument handling and input errors.
//!
//! None of these reach the network: every failure happens before the
//! first completion request is built.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn tlx(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tlx").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    tlx(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Translate a text file through an LLM completion endpoint",
        ))
        .stdout(predicate::str::contains("<API_KEY>"))
        .stdout(predicate::str::contains("<OUTPUT_FILE>"))
        .stdout(predicate::str::contains("--mode"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    tlx(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_exits_1() {
    let home = TempDir::new().unwrap();
    tlx(&home)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_three_arguments_exits_1_and_writes_nothing() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let input = work.path().join("in.txt");
    std::fs::write(&input, "Hello").unwrap();

    tlx(&home)
        .args(["sk-test", "ja", input.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 1);
}

#[test]
fn test_five_arguments_exits_1() {
    let home = TempDir::new().unwrap();
    tlx(&home)
        .args(["sk-test", "ja", "in.txt", "out.txt", "extra"])
        .assert()
        .code(1);
}

#[test]
fn test_missing_input_exits_1_without_output() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let output = work.path().join("out.txt");

    tlx(&home)
        .args([
            "sk-test",
            "ja",
            "/nonexistent/path/to/input.txt",
            output.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"));

    assert!(!output.exists());
}

#[test]
fn test_missing_input_in_lines_mode_keeps_existing_output() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let output = work.path().join("out.txt");
    std::fs::write(&output, "previous run").unwrap();

    tlx(&home)
        .args([
            "--mode",
            "lines",
            "sk-test",
            "ja",
            "/nonexistent/path/to/input.txt",
            output.to_str().unwrap(),
        ])
        .assert()
        .code(1);

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous run");
}

#[test]
fn test_invalid_config_file_exits_1() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("tlx");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[tlx\n").unwrap();

    tlx(&home)
        .args(["sk-test", "ja", "in.txt", "out.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
