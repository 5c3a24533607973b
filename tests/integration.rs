// Integration tests for the repograde CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify exit codes
// and stdout/stderr output. Nothing here touches the network: every case
// fails argument or URL validation before a request is made.
//
// Prerequisites: assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the repograde binary.
fn repograde() -> Command {
    Command::cargo_bin("repograde").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    repograde()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repograde"));
}

#[test]
fn cli_help_flag() {
    repograde()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("quality scoring"));
}

#[test]
fn analyze_requires_url() {
    repograde()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn analyze_rejects_non_github_urls() {
    repograde()
        .args(["analyze", "https://gitlab.com/owner/repo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid GitHub repository URL"));
}

#[test]
fn analyze_rejects_unknown_format() {
    repograde()
        .args(["analyze", "https://github.com/owner/repo", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_and_verbose_are_mutually_exclusive() {
    repograde()
        .args(["-q", "-v", "analyze", "https://github.com/owner/repo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
