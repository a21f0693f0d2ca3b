//! Tests for the `appcast` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

fn appcast() -> Command {
    Command::cargo_bin("appcast").unwrap()
}

#[test]
fn test_check_prints_selected_release() {
    appcast()
        .args(["check", &fixture("multiplatform.xml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Version 1.5\n"))
        .stdout(predicate::str::contains("Version: 1.5 (build 1.5.0.812)"))
        .stdout(predicate::str::contains("TestApp-1.5-setup.exe"));
}

#[test]
fn test_check_json_output() {
    let output = appcast()
        .args(["check", &fixture("generic.xml"), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Version 3.2.1");
    assert_eq!(json["download_url"], "https://example.com/app-3.2.1.zip");
    assert!(json.get("os").is_none());
}

#[test]
fn test_check_yaml_output() {
    appcast()
        .args(["check", &fixture("generic.xml"), "-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Version 3.2.1"));
}

#[test]
fn test_check_with_platform() {
    appcast()
        .args(["check", &fixture("multiplatform.xml"), "--platform", "macos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version 1.5 (macOS)"));
}

#[test]
fn test_list_prints_every_release_read() {
    appcast()
        .args(["list", &fixture("multiplatform.xml"), "--platform", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 release(s) read"))
        .stdout(predicate::str::contains("Version 1.4"));
}

#[test]
fn test_list_empty_channel() {
    appcast()
        .args(["list", &fixture("empty_channel.xml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 release(s) read"));
}

#[test]
fn test_check_empty_channel_fails() {
    appcast()
        .args(["check", &fixture("empty_channel.xml")])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No items found"));
}

#[test]
fn test_check_malformed_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    fs::write(&path, "<rss><channel><item>").unwrap();

    appcast()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML parser error"));
}

#[test]
fn test_check_missing_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.xml");

    appcast()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_check_rejects_empty_platform() {
    appcast()
        .args(["check", &fixture("generic.xml"), "--platform", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
