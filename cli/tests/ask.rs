//! # Elevated CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! `elevated ask` against the fixed rule table.
//!

mod common;
use common::*;
use predicates::prelude::*;
use serde_json::Value;

const FALLBACK_START: &str = "I'm not sure about that specific question";

#[test]
fn test_ask_pricing() {
    elevated_cmd()
        .args(["ask", "What's your pricing?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("We offer three packages"));
}

#[test]
fn test_ask_ownership_from_separate_words() {
    elevated_cmd()
        .args(["ask", "Do", "I", "keep", "ownership", "of", "my", "masters?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Yes! You keep 100% ownership"));
}

#[test]
fn test_ask_contact_support_prefers_support() {
    elevated_cmd()
        .args(["ask", "How can I contact support?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Basic: Email support"));
}

#[test]
fn test_ask_unknown_falls_back() {
    elevated_cmd()
        .args(["ask", "asdfqwerty"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(FALLBACK_START));
}

#[test]
fn test_ask_empty_string_falls_back() {
    elevated_cmd()
        .args(["ask", ""])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(FALLBACK_START));
}

#[test]
fn test_ask_is_case_insensitive() {
    elevated_cmd()
        .args(["ask", "HOW MUCH DOES IT COST"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("We offer three packages"));
}

#[test]
fn test_ask_json_output() {
    let output = elevated_cmd()
        .args(["ask", "--json", "can", "I", "get", "a", "refund?"])
        .output()
        .expect("Failed to run elevated ask");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(body["topic"], "refunds");
    assert!(body["answer"]
        .as_str()
        .unwrap()
        .starts_with("We offer refunds"));
}

#[test]
fn test_ask_json_fallback_has_null_topic() {
    let output = elevated_cmd()
        .args(["ask", "xyz", "--json"])
        .output()
        .expect("Failed to run elevated ask");
    let body: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert!(body["topic"].is_null());
}

#[test]
fn test_ask_requires_question() {
    elevated_cmd().arg("ask").assert().failure();
}
