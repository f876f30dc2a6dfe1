//! End-to-end tests for the interactive session over piped stdin.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn warden(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("warden").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn default_command_is_session() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .write_stdin("deng\n1\ntop-secret\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your username: "))
        .stdout(predicate::str::contains("Choose an access control model:"))
        .stdout(predicate::str::contains("2. DAC (Discretionary Access Control)"))
        .stdout(predicate::str::contains("3. RBAC (Role-Based Access Control)"))
        .stdout(predicate::str::contains("Access Granted"))
        .stdout(predicate::str::contains(
            "Access Log:\ndeng tried MAC access: Access Granted",
        ));
}

#[test]
fn session_subcommand_runs_dac() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .arg("session")
        .write_stdin("Deng\n2\nfile2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter file name (file1, file2, file3): "))
        .stdout(predicate::str::contains("deng tried DAC access: Access Granted"));
}

#[test]
fn session_unknown_user_stops_early() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .write_stdin("mallory\n1\ntop-secret\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid username. Access Denied."))
        .stdout(predicate::str::contains("Choose an access control model").not())
        .stdout(predicate::str::contains("Access Log:").not());
}

#[test]
fn session_denial_exits_one() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .write_stdin("luna\n3\ndoctor\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("luna tried RBAC access: Access Denied"));
}

#[test]
fn session_abac_wrong_device() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .write_stdin("keng\n4\n12\ncompany-laptop\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Enter current hour (0-23): "))
        .stdout(predicate::str::contains("keng tried ABAC access: Access Denied"));
}

#[test]
fn session_bad_hour_exits_two() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .write_stdin("keng\n4\n99\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Invalid input for hour. Please enter a number between 0-23.",
        ))
        .stdout(predicate::str::contains("tried ABAC").not());
}

#[test]
fn session_invalid_choice_exits_two() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .write_stdin("red\n5\n")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Invalid choice."));
}

#[test]
fn session_denial_is_quiet_on_stderr_by_default() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .write_stdin("red\n1\ntop-secret\n")
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn session_rust_log_enables_tracing_on_stderr() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .env("RUST_LOG", "warn")
        .write_stdin("red\n1\ntop-secret\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Access denied"));
}

#[test]
fn session_debug_level_traces_settings_and_end() {
    let home = TempDir::new().unwrap();
    warden(&home)
        .env("RUST_LOG", "debug")
        .write_stdin("deng\n3\ndoctor\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Settings loaded"))
        .stderr(predicate::str::contains("Session ended"))
        .stderr(predicate::str::contains("Granted"));
}
