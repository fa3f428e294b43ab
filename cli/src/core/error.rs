//! # MindMate Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout MindMate. It follows a
//! two-layer approach:
//! - `MindmateError`: a `thiserror` enum for the failures callers may want to
//!   recognise (bad configuration, an unreadable mood log, a failing classifier)
//! - `Result<T>`: an alias for `anyhow::Result<T>` so that any error can be
//!   propagated with `?` and enriched with `anyhow::Context`
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! anyhow::bail!(MindmateError::Config("log.path must not be empty".into()));
//!
//! // Add context to errors using anyhow
//! let raw = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read mood log: {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match log.load_all() {
//!     Err(e) if matches!(e.downcast_ref(), Some(MindmateError::MoodLog { .. })) => {
//!         println!("The mood history file is corrupt.");
//!     }
//!     other => { /* ... */ }
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the MindMate application.
#[derive(Error, Debug)]
pub enum MindmateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Mood log '{}' is not a valid entry list: {source}", .path.display())]
    MoodLog {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Emotion classifier error: {0}")]
    Classifier(String),

    #[error("Emotion classifier request failed: {source}")]
    ClassifierApi {
        #[from]
        source: reqwest::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
