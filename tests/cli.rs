// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the cml binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cml_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cml").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn check_stdin_valid_message_succeeds() {
    let dir = TempDir::new().unwrap();

    cml_in(&dir)
        .args(["check", "--stdin"])
        .write_stdin("fix: fix bug\n\nSee #42 for details.\n\nCloses #42\n")
        .assert()
        .success();
}

#[test]
fn check_stdin_disallowed_type_fails() {
    let dir = TempDir::new().unwrap();

    cml_in(&dir)
        .args(["check", "--stdin"])
        .write_stdin("chore: update deps\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("type-enum"));
}

#[test]
fn check_warning_only_passes_unless_strict() {
    let dir = TempDir::new().unwrap();

    // Missing issue reference is a warning by default
    cml_in(&dir)
        .args(["check", "--stdin"])
        .write_stdin("feat: Add login button\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("issue-reference-in-footer"));

    cml_in(&dir)
        .args(["check", "--stdin", "--strict"])
        .write_stdin("feat: Add login button\n")
        .assert()
        .failure();
}

#[test]
fn check_message_file() {
    let dir = TempDir::new().unwrap();
    let msg_path = dir.path().join("COMMIT_EDITMSG");
    std::fs::write(&msg_path, "feat: Add thing\n\nCloses #7\n").unwrap();

    cml_in(&dir)
        .args(["check", "--message-file"])
        .arg(&msg_path)
        .assert()
        .success();
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();

    cml_in(&dir)
        .args(["check", "--stdin", "--format", "json"])
        .write_stdin("chore: update deps\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"valid\": false"));
}

#[test]
fn check_respects_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("cml.toml"),
        "[rules.type-enum]\nseverity = \"error\"\nvalues = [\"chore\"]\n",
    )
    .unwrap();

    cml_in(&dir)
        .args(["check", "--stdin"])
        .write_stdin("chore: update deps\n")
        .assert()
        .success();
}

#[test]
fn init_writes_config() {
    let dir = TempDir::new().unwrap();

    cml_in(&dir).arg("init").assert().success();
    assert!(dir.path().join("cml.toml").exists());

    // A second init without --force refuses to overwrite
    cml_in(&dir).arg("init").assert().failure();
    cml_in(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn rules_lists_every_rule() {
    let dir = TempDir::new().unwrap();

    cml_in(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("type-enum")
                .and(predicate::str::contains("footer-max-line-length")),
        );
}
