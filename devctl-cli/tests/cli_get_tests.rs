use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn get_branch_pattern_help_mentions_patterns() {
    Command::cargo_bin("devctl")
        .unwrap()
        .args(["get", "branch-pattern", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("branch patterns"));
}

#[test]
fn get_branch_pattern_alias_is_accepted() {
    Command::cargo_bin("devctl")
        .unwrap()
        .args(["get", "bp", "--help"])
        .assert()
        .success();
}

#[test]
fn get_branch_pattern_fails_cleanly_without_cluster() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("devctl")
        .unwrap()
        .env("DEVCTL_CONFIG_DIR", dir.path())
        .env("KUBECONFIG", dir.path().join("missing-kubeconfig"))
        .env_remove("KUBERNETES_SERVICE_HOST")
        .args(["get", "branch-pattern"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Get command failed"));
}

#[test]
fn get_environments_fails_cleanly_without_cluster() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("devctl")
        .unwrap()
        .env("DEVCTL_CONFIG_DIR", dir.path())
        .env("KUBECONFIG", dir.path().join("missing-kubeconfig"))
        .env_remove("KUBERNETES_SERVICE_HOST")
        .args(["get", "environments"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Get command failed"));
}
