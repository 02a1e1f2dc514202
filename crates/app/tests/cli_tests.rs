//! CLI integration tests
//!
//! Exercise the process boundary: usage errors, load errors, and report
//! rendering. None of these touch the network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write as _;

fn restcheck() -> Command {
    Command::cargo_bin("restcheck").expect("binary builds")
}

#[test]
fn missing_argument_is_a_usage_error() {
    restcheck()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn nonexistent_spec_is_a_load_error() {
    restcheck()
        .arg("does-not-exist.yaml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unsupported_extension_is_a_load_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("suite.txt");
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(b"tests: []"))
        .expect("write spec");

    restcheck()
        .arg(path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported spec format"));
}

#[test]
fn empty_plan_passes_and_renders_markdown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.yaml");
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(b"tests: []\n"))
        .expect("write spec");

    restcheck()
        .arg(path)
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Test | Status | Time (ms) | Passed |"));
}

#[test]
fn malformed_spec_is_distinguishable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    std::fs::File::create(&path)
        .and_then(|mut f| f.write_all(b"tests:\n  - name: [unclosed"))
        .expect("write spec");

    restcheck()
        .arg(path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed spec"));
}
