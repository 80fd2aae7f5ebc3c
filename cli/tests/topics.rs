//! # Elevated CLI Topics Integration Tests
//!
//! File: cli/tests/topics.rs
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_topics_lists_rules_in_order() {
    let output = elevated_cmd()
        .arg("topics")
        .output()
        .expect("Failed to run elevated topics");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("pricing"));
    assert!(lines[0].contains("\"price\", \"cost\", \"pricing\""));
    assert!(lines[7].contains("support"));
    assert!(lines[11].contains("contact"));
    assert!(lines[12].contains("fallback"));
}

#[test]
fn test_topics_with_answers() {
    elevated_cmd()
        .args(["topics", "--answers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("We offer three packages"))
        .stdout(predicate::str::contains("I'm not sure about that specific question"));
}
