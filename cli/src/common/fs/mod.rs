//! # MindMate Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared across the CLI. Currently only the `io`
//! submodule, which the mood log uses to read and rewrite its history file.
//!
//! ```rust
//! use crate::common::fs::io;
//! io::write_string_to_file(path, "[]")?;
//! ```
//!

/// Basic file I/O (`ensure_dir_exists`, `read_optional`, `write_string_to_file`).
pub mod io;
