//! # Elevated CLI Tools Integration Tests
//!
//! File: cli/tests/tools.rs
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_tools_copy_press_release() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args([
            "tools",
            "--no-delay",
            "copy",
            "--kind",
            "press-release",
            "--track",
            "Night Drive",
            "--artist",
            "Nova",
            "--genre",
            "Synthwave",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FOR IMMEDIATE RELEASE"))
        .stdout(predicate::str::contains("Nova Releases New Synthwave Single \"Night Drive\""));
}

#[test]
fn test_tools_copy_defaults_to_playlist_pitch() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["tools", "copy", "--track", "Glow", "--artist", "Mira", "--no-delay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Playlist Pitch for \"Glow\""));
}

#[test]
fn test_tools_copy_rejects_blank_artist() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["tools", "--no-delay", "copy", "--track", "Glow", "--artist", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Track name and artist name are required"));
}

#[test]
fn test_tools_cover_art_prints_stock_url() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["tools", "--no-delay", "cover-art", "--style", "minimalist", "neon", "skyline"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://images.pexels.com/"));
}

#[test]
fn test_tools_cover_art_requires_prompt() {
    elevated_cmd()
        .args(["tools", "--no-delay", "cover-art"])
        .assert()
        .failure();
}
