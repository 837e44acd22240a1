//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run from an empty directory so no `.env` up the tree leaks in.
/// The returned guard must outlive the command.
fn devforum() -> (Command, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("devforum").unwrap();
    cmd.current_dir(dir.path()).env_remove("DATABASE_URL");
    (cmd, dir)
}

#[test]
fn test_help_lists_commands() {
    let (mut cmd, _dir) = devforum();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check-db"));
}

#[test]
fn test_serve_help() {
    let (mut cmd, _dir) = devforum();
    cmd.arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--pool-size"))
        .stdout(predicate::str::contains("--max-overflow"));
}

#[test]
fn test_serve_requires_database_url() {
    let (mut cmd, _dir) = devforum();
    cmd.arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_malformed_database_url() {
    let (mut cmd, _dir) = devforum();
    cmd.arg("serve")
        .arg("--database-url")
        .arg("mysql://localhost/devforum")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed database URL"));
}

#[test]
fn test_check_db_requires_database_url() {
    let (mut cmd, _dir) = devforum();
    cmd.arg("check-db")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_reads_env_file_from_parent_directory() {
    let (mut cmd, dir) = devforum();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "DATABASE_URL=mysql://from-dotenv/devforum\n",
    )
    .unwrap();

    // dotenvy walks up from the working directory and finds the parent's file
    cmd.current_dir(&nested)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed database URL"));
}

#[test]
fn test_check_db_reports_failure_on_stderr_only() {
    let (mut cmd, _dir) = devforum();
    cmd.arg("check-db")
        .arg("--database-url")
        .arg("postgres://nobody@127.0.0.1:1/none")
        .arg("--timeout")
        .arg("1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Database connection").not())
        .stderr(predicate::str::contains("could not connect to database"));
}
