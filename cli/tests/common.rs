//! # Elevated CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! runs inside a scratch directory with its own config home, so neither a
//! developer's `~/.config/elevated` nor a stray `.elevated.toml` can change
//! the output under test.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// A scratch working directory plus an empty config home.
pub struct Sandbox {
    pub dir: TempDir,
    config_home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp working dir");
        // Keeps project config discovery from walking above the sandbox.
        std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        Self {
            dir,
            config_home: TempDir::new().expect("Failed to create temp config home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.elevated.toml` into the working directory.
    pub fn write_project_config(&self, contents: &str) {
        std::fs::write(self.path().join(".elevated.toml"), contents)
            .expect("Failed to write project config");
    }

    /// `elevated` command running inside the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = elevated_cmd();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env_remove("RUST_LOG");
        cmd
    }
}

/// # Get Elevated Command (`elevated_cmd`)
///
/// `assert_cmd::Command` for the compiled `elevated` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn elevated_cmd() -> Command {
    Command::cargo_bin("elevated").expect("Failed to find elevated binary for testing")
}
