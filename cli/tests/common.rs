//! # MindMate CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Every command built here
//! runs inside its own temporary directory with an isolated config home and
//! the offline `lexicon` classifier, so tests never touch the network or the
//! developer's own mood history.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch working directory for one test.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create sandbox dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Default mood history location inside the sandbox.
    pub fn log_path(&self) -> PathBuf {
        self.path().join("mood_history.json")
    }

    /// `mindmate` running in the sandbox with the lexicon backend.
    pub fn cmd(&self) -> Command {
        let mut cmd = mindmate_cmd();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("HOME", self.path())
            .env("MINDMATE_CLASSIFIER", "lexicon")
            .env_remove("MINDMATE_LOG_FILE")
            .env_remove("MINDMATE_MODEL")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// # Get MindMate Command (`mindmate_cmd`)
///
/// Creates an `assert_cmd::Command` pointing to the compiled `mindmate` binary.
pub fn mindmate_cmd() -> Command {
    Command::cargo_bin("mindmate").expect("Failed to find mindmate binary for testing")
}
