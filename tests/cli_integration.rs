//! CLI Integration Tests
//!
//! Exercise the desktop binary's command line paths that exit before a
//! window is opened.

use assert_cmd::Command;
use predicates::prelude::*;

fn desktop_cmd() -> Command {
    Command::cargo_bin("pillbar-desktop").expect("Failed to find pillbar-desktop binary")
}

#[test]
fn test_print_catalog() {
    let output = desktop_cmd().arg("--print-catalog").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["title"], "All Accessories");
    assert_eq!(items[6]["title"], "AirPods");
    assert_eq!(items[6]["badge_count"], 4);
}

#[test]
fn test_unknown_initial_filter_fails() {
    desktop_cmd()
        .args(["--initial", "Vision Pro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown filter 'Vision Pro'"));
}

#[test]
fn test_invalid_appearance_rejected() {
    desktop_cmd()
        .args(["--appearance", "sepia", "--print-catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid appearance mode"));
}

#[test]
fn test_help_mentions_options() {
    desktop_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--initial"))
        .stdout(predicate::str::contains("--appearance"))
        .stdout(predicate::str::contains("--print-catalog"));
}
