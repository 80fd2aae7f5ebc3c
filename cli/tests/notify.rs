//! # Elevated CLI Notify Integration Tests
//!
//! File: cli/tests/notify.rs
//!

mod common;
use common::*;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_notify_prints_acknowledgement() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .cmd()
        .args(["notify", "--email", "ada@example.com", "--name", "Ada", "--kind", "tour"])
        .output()
        .expect("Failed to run elevated notify");
    assert!(output.status.success());

    let ack: Value = serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(ack["success"], true);
    assert_eq!(ack["message"], "tour email would be sent to ada@example.com");
    assert_eq!(ack["subject"], "🚀 Your Guided Tour of Elevated Media House");
}

#[test]
fn test_notify_show_body_uses_project_app_url() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config("[notify]\napp_url = \"https://demo.elevated.test/\"\n");
    sandbox
        .cmd()
        .args([
            "notify",
            "--email",
            "ada@example.com",
            "--name",
            "Ada",
            "--kind",
            "first-release",
            "--show-body",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: 🎶 Ready to Release Your Music?"))
        .stdout(predicate::str::contains("https://demo.elevated.test/portal"))
        .stdout(predicate::str::contains("Ada"));
}

#[test]
fn test_notify_rejects_blank_name() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["notify", "--email", "ada@example.com", "--name", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required fields: email, name, type"));
}

#[test]
fn test_notify_rejects_unknown_kind() {
    elevated_cmd()
        .args(["notify", "--email", "ada@example.com", "--name", "Ada", "--kind", "newsletter"])
        .assert()
        .failure();
}
