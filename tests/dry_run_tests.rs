//! Dry-run mode never fetches or records anything

mod common;

use common::{TestRepository, TestWorkspace};
use predicates::prelude::*;

#[test]
fn test_get_dry_run_leaves_no_file_and_no_state() {
    let repo = TestRepository::new();
    repo.write_metadata(Some("1.0"), &["1.0"]);
    repo.publish("1.0", "release 1.0");
    let workspace = TestWorkspace::new();

    workspace
        .mvnfetch()
        .args([
            "get",
            "lib",
            "-g",
            "org.example",
            "-a",
            "demo",
            "--repo-url",
            &repo.url(),
            "--dry-run",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": \"would_change\""))
        .stdout(predicate::str::contains(repo.file_url("1.0", "1.0")));

    assert!(!workspace.file_exists("lib/demo.jar"));
    assert!(!workspace.state_file().exists());
}

#[test]
fn test_dry_run_after_get_is_unchanged() {
    let repo = TestRepository::new();
    repo.write_metadata(Some("1.0"), &["1.0"]);
    repo.publish("1.0", "release 1.0");
    let workspace = TestWorkspace::new();
    let url = repo.url();
    let args = ["get", "lib", "-g", "org.example", "-a", "demo", "--repo-url", &url];

    workspace.mvnfetch().args(args).assert().success();

    workspace
        .mvnfetch()
        .args(args)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));
}

#[test]
fn test_apply_dry_run() {
    let repo = TestRepository::new();
    repo.write_metadata(Some("1.0"), &["1.0"]);
    repo.publish("1.0", "release 1.0");
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "mvnfetch.yaml",
        &format!(
            "repo_url: {}\nartifacts:\n  - name: lib\n    group_id: org.example\n    artifact_id: demo\n",
            repo.url()
        ),
    );

    workspace
        .mvnfetch()
        .args(["apply", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would change"));

    assert!(!workspace.file_exists("lib/demo.jar"));
    assert!(!workspace.state_file().exists());
}
