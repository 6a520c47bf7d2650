//! CLI integration tests using the real artcp binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn artcp_cmd() -> Command {
    Command::cargo_bin("artcp").unwrap()
}

#[test]
fn test_help_output() {
    artcp_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("artifact coordinates"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    artcp_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("artcp"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    artcp_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("artcp"));
}

#[test]
fn test_copy_without_artifacts_fails() {
    artcp_cmd()
        .arg("copy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No artifacts requested"));
}

#[test]
fn test_copy_invalid_coordinate_fails() {
    artcp_cmd()
        .args(["copy", "org.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid artifact coordinate"));
}

#[test]
fn test_copy_missing_version_fails_without_project() {
    artcp_cmd()
        .args(["copy", "org.example:foo:"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No version for coordinate"));
}

#[test]
fn test_copy_unknown_layout_fails_before_resolution() {
    let repo = common::TestRepo::new();
    repo.put_flat("foo", "1.0", "jar");

    artcp_cmd()
        .args([
            "copy",
            "org.example:foo:1.0",
            "--remote-repositories",
            &format!("central::maven1::{}", repo.path.display()),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown repository layout: maven1"));
}

#[test]
fn test_copy_malformed_repository_spec_fails() {
    artcp_cmd()
        .args([
            "copy",
            "org.example:foo:1.0",
            "--remote-repositories",
            "central::file:///srv/repo",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid repository specification"));
}

#[test]
fn test_copy_unresolvable_coordinate_fails() {
    let repo = common::TestRepo::new();

    artcp_cmd()
        .args([
            "copy",
            "org.example:missing:1.0",
            "--remote-repositories",
            &repo.flat_spec("empty"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve"));
}

#[test]
fn test_copy_skip_is_noop() {
    artcp_cmd()
        .args(["copy", "--skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping execution"));
}
