//! # MindMate Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the command modules:
//! - `emotion`: the classifier seam and its backends
//! - `fs`: filesystem helpers used by the mood log
//!

/// Emotion classifier trait, result types and backends.
pub mod emotion;
/// Utilities for filesystem operations.
pub mod fs;
