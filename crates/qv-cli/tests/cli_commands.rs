#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn qv() -> Command {
    Command::cargo_bin("qv").unwrap()
}

// An address nothing listens on, so network commands fail fast.
const DEAD_API: &str = "http://127.0.0.1:1";

#[test]
fn help_lists_subcommands() {
    qv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("quest"))
        .stdout(predicate::str::contains("profile"));
}

#[test]
fn quest_help_lists_lifecycle() {
    qv().args(["quest", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn qr_renders_both_codes_offline() {
    qv().args(["qr", "--base-url", "https://vault.example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Quest"))
        .stdout(predicate::str::contains("New Achievement"))
        .stdout(predicate::str::contains("https://vault.example/quests/new"));
}

#[test]
fn visibility_rejects_unknown_target() {
    qv().args(["visibility", "everything", "--hide", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown target"));
}

#[test]
fn visibility_requires_a_direction() {
    let dir = TempDir::new().unwrap();
    qv().env("QUESTVAULT_TOKEN_FILE", dir.path().join("token"))
        .args(["visibility", "quests", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--hide or --show"));
}

#[test]
fn timeline_without_token_reports_not_logged_in() {
    let dir = TempDir::new().unwrap();
    qv().env("QUESTVAULT_TOKEN_FILE", dir.path().join("token"))
        .args(["--api-url", DEAD_API, "timeline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}

#[test]
fn timeline_with_dead_api_reports_request_failure() {
    let dir = TempDir::new().unwrap();
    let token = dir.path().join("token");
    fs::write(&token, "stale-token").unwrap();

    qv().env("QUESTVAULT_TOKEN_FILE", &token)
        .args(["--api-url", DEAD_API, "timeline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"));
}

#[test]
fn logout_removes_the_token_file() {
    let dir = TempDir::new().unwrap();
    let token = dir.path().join("token");
    fs::write(&token, "abc123").unwrap();

    qv().env("QUESTVAULT_TOKEN_FILE", &token)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));
    assert!(!token.exists());
}

#[test]
fn whoami_without_token_is_not_logged_in() {
    let dir = TempDir::new().unwrap();
    qv().env("QUESTVAULT_TOKEN_FILE", dir.path().join("token"))
        .args(["--api-url", DEAD_API, "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn logout_twice_is_harmless() {
    let dir = TempDir::new().unwrap();
    qv().env("QUESTVAULT_TOKEN_FILE", dir.path().join("token"))
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn quest_show_rejects_malformed_id() {
    let dir = TempDir::new().unwrap();
    qv().env("QUESTVAULT_TOKEN_FILE", dir.path().join("token"))
        .args(["--api-url", DEAD_API, "quest", "show", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid id"));
}
