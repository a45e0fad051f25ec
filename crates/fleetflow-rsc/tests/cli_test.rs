#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// CLI help lists every lifecycle command
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("fleet-rsc").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("terminate"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("fleet-rsc").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fleet-rsc"));
}

#[test]
fn test_status_requires_instance() {
    let mut cmd = Command::cargo_bin("fleet-rsc").unwrap();
    cmd.args(["status", "--conf", "resource.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--instance"));
}

#[test]
fn test_missing_resource_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let mut cmd = Command::cargo_bin("fleet-rsc").unwrap();
    cmd.arg("create")
        .arg("--conf")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read resource file"));
}

#[test]
fn test_unsupported_kind() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("resource.json");
    fs::write(
        &path,
        r#"{
  "kind": "dataproc",
  "workflowId": "wf",
  "resourceId": "r",
  "instanceId": "1",
  "spec": {}
}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("fleet-rsc").unwrap();
    cmd.arg("create")
        .arg("--conf")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported resource kind 'dataproc'"));
}

#[test]
fn test_status_rejects_invalid_instance_json() {
    let mut cmd = Command::cargo_bin("fleet-rsc").unwrap();
    cmd.args(["status", "--conf", "resource.json", "--instance", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Instance spec is not valid JSON"));
}
