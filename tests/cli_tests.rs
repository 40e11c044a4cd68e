//! Integration tests for CLI functionality

use std::process::Command;

/// Get path to compiled binary
fn lfm_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("lfm")
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    let output = Command::new(lfm_bin()).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Manage Flow Manager network paths and services"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    let output = Command::new(lfm_bin()).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lfm"));
}

/// Test that every entity group is listed in the help text
#[test]
fn test_entity_groups_present() {
    let output = Command::new(lfm_bin()).arg("--help").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    for group in ["path", "treepath", "eline", "etree", "tap", "ofnode", "controller"] {
        assert!(stdout.contains(group), "missing group {}", group);
    }
}

/// Test that an unknown subcommand is rejected
#[test]
fn test_unknown_subcommand() {
    let output = Command::new(lfm_bin()).arg("frobnicate").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("frobnicate"));
}

/// Test that a missing topology file fails cleanly
#[test]
fn test_missing_topology_file() {
    let output = Command::new(lfm_bin())
        .args(["--topology", "/nonexistent/topology.yml", "path", "list"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
