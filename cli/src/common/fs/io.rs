//! # MindMate Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` used by the mood log:
//! - **`ensure_dir_exists`**: creates a directory (and parents) if missing, and
//!   rejects a path that exists but is not a directory.
//! - **`read_optional`**: reads a whole file as bytes, mapping "not found" to
//!   `Ok(None)` so a missing file is never an error.
//! - **`write_string_to_file`**: ensures the parent directory exists, then
//!   replaces the file contents in a single `fs::write`.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! let existing = io::read_optional(path)?.unwrap_or_default();
//! io::write_string_to_file(path, &updated)?;
//! ```
//!
use crate::core::error::{MindmateError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if
/// creating it fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(MindmateError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the raw bytes of a file, returning `None` when it does not exist.
///
/// No text decoding happens here; callers decide what malformed content means.
///
/// # Errors
///
/// Any I/O failure other than `NotFound` (permissions, the path being a
/// directory) is returned with the file name as context.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("File not found, treating as absent: {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Writes string content to a file path, overwriting it if it exists.
///
/// The write is not atomic: an interrupted write can leave a truncated file.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("file.json").parent()` is `Some("")`.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to file: {:?}", content.len(), path);
    Ok(())
}
