//! # MindMate Mood Log
//!
//! File: cli/src/core/mood_log.rs
//!
//! ## Overview
//!
//! Every classified message is recorded as a `MoodEntry` in a JSON array on
//! disk:
//!
//! ```json
//! [
//!     {
//!         "text": "I feel tired",
//!         "emotion": "sadness",
//!         "date": "2024-01-01 10:00"
//!     }
//! ]
//! ```
//!
//! ## Architecture
//!
//! - `load_all` reads the whole array. A missing file is an empty history.
//! - `append` reads the array, pushes one entry and rewrites the whole file
//!   with 4-space indentation.
//!
//! The read-modify-write cycle takes no lock. Two concurrent appends can both
//! read the same snapshot, and the later write then drops the other entry.
//! The rewrite is not atomic either; an interrupted write can truncate the file.
//!
//! A file that exists but does not parse is handled according to the
//! log's `CorruptLogPolicy`.
//!
use crate::common::fs::io;
use crate::core::error::{MindmateError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Timestamp layout of `MoodEntry::date` (minute precision, local time).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One logged interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub text: String,
    pub emotion: String,
    pub date: String,
}

impl MoodEntry {
    pub fn new(text: &str, emotion: &str, now: NaiveDateTime) -> Self {
        Self {
            text: text.to_string(),
            emotion: emotion.to_string(),
            date: now.format(DATE_FORMAT).to_string(),
        }
    }
}

/// What to do when the history file exists but is not a valid entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptLogPolicy {
    /// Return the parse error to the caller.
    Fail,
    /// Log a warning and continue as if the history were empty.
    TreatAsEmpty,
}

#[derive(Debug, Clone)]
pub struct MoodLog {
    path: PathBuf,
    policy: CorruptLogPolicy,
}

impl MoodLog {
    pub fn new(path: impl Into<PathBuf>, policy: CorruptLogPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a history file has been written yet.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Every entry in insertion order; empty if the file does not exist.
    pub fn load_all(&self) -> Result<Vec<MoodEntry>> {
        let Some(raw) = io::read_optional(&self.path)? else {
            debug!("No mood history at {}, starting empty.", self.path.display());
            return Ok(Vec::new());
        };

        // Invalid UTF-8 surfaces as a parse error, so the policy covers it too.
        match serde_json::from_slice::<Vec<MoodEntry>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(source) => match self.policy {
                CorruptLogPolicy::Fail => Err(MindmateError::MoodLog {
                    path: self.path.clone(),
                    source,
                }
                .into()),
                CorruptLogPolicy::TreatAsEmpty => {
                    warn!(
                        "Ignoring unreadable mood history {}: {}",
                        self.path.display(),
                        source
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Records one classified message and rewrites the history file.
    pub fn append(&self, text: &str, emotion: &str, now: NaiveDateTime) -> Result<MoodEntry> {
        let mut entries = self.load_all()?;
        let entry = MoodEntry::new(text, emotion, now);
        entries.push(entry.clone());
        self.write_all(&entries)?;
        debug!(
            "Logged '{}' to {} ({} entries)",
            entry.emotion,
            self.path.display(),
            entries.len()
        );
        Ok(entry)
    }

    fn write_all(&self, entries: &[MoodEntry]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries
            .serialize(&mut serializer)
            .map_err(|source| MindmateError::MoodLog {
                path: self.path.clone(),
                source,
            })?;
        let content = String::from_utf8(buf).map_err(|e| {
            MindmateError::FileSystem(format!("serialized mood log is not UTF-8: {e}"))
        })?;
        io::write_string_to_file(&self.path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 42)
            .unwrap()
    }

    #[test]
    fn test_load_all_without_file_is_empty() -> Result<()> {
        let dir = tempdir()?;
        let log = MoodLog::new(dir.path().join("mood_history.json"), CorruptLogPolicy::Fail);
        assert!(log.load_all()?.is_empty());
        assert!(!log.exists());
        Ok(())
    }

    #[test]
    fn test_append_then_load_single_entry() -> Result<()> {
        let dir = tempdir()?;
        let log = MoodLog::new(dir.path().join("mood_history.json"), CorruptLogPolicy::Fail);

        log.append("I feel tired", "sadness", at(10, 0))?;

        assert_eq!(
            log.load_all()?,
            vec![MoodEntry {
                text: "I feel tired".into(),
                emotion: "sadness".into(),
                date: "2024-01-01 10:00".into(),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_sequential_appends_keep_order() -> Result<()> {
        let dir = tempdir()?;
        let log = MoodLog::new(dir.path().join("mood_history.json"), CorruptLogPolicy::Fail);
        let inputs = [
            ("first", "joy", at(9, 5)),
            ("second ✨ with \"quotes\"", "fear", at(9, 6)),
            ("third\nline", "love", at(23, 59)),
        ];

        for (text, emotion, now) in inputs {
            log.append(text, emotion, now)?;
        }

        let entries = log.load_all()?;
        assert_eq!(entries.len(), inputs.len());
        for (entry, (text, emotion, now)) in entries.iter().zip(inputs) {
            assert_eq!(entry.text, text);
            assert_eq!(entry.emotion, emotion);
            assert_eq!(entry.date, now.format(DATE_FORMAT).to_string());
        }
        Ok(())
    }

    #[test]
    fn test_file_uses_four_space_indent_and_date_key() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("mood_history.json");
        let log = MoodLog::new(&path, CorruptLogPolicy::Fail);
        log.append("hi", "joy", at(8, 30))?;

        let raw = fs::read_to_string(&path)?;
        assert_eq!(
            raw,
            "[\n    {\n        \"text\": \"hi\",\n        \"emotion\": \"joy\",\n        \"date\": \"2024-01-01 08:30\"\n    }\n]"
        );
        Ok(())
    }

    #[test]
    fn test_append_creates_parent_directories() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("journal").join("moods.json");
        let log = MoodLog::new(&path, CorruptLogPolicy::Fail);
        log.append("ok", "joy", at(12, 0))?;
        assert!(path.is_file());
        Ok(())
    }

    #[test]
    fn test_corrupt_file_fails_under_fail_policy() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("mood_history.json");
        fs::write(&path, "[{\"text\": \"cut off")?;
        let log = MoodLog::new(&path, CorruptLogPolicy::Fail);

        let err = log.load_all().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MindmateError>(),
            Some(MindmateError::MoodLog { .. })
        ));
        assert!(log.append("x", "joy", at(1, 0)).is_err());
        // The corrupt file is left untouched.
        assert_eq!(fs::read_to_string(&path)?, "[{\"text\": \"cut off");
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_replaced_under_treat_as_empty() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("mood_history.json");
        fs::write(&path, "not json at all")?;
        let log = MoodLog::new(&path, CorruptLogPolicy::TreatAsEmpty);

        assert!(log.load_all()?.is_empty());
        log.append("fresh start", "surprise", at(7, 15))?;

        let reread = MoodLog::new(&path, CorruptLogPolicy::Fail).load_all()?;
        assert_eq!(reread.len(), 1);
        assert_eq!(reread[0].text, "fresh start");
        Ok(())
    }

    #[test]
    fn test_non_utf8_file_follows_corrupt_policy() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("mood_history.json");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x5b])?;

        let err = MoodLog::new(&path, CorruptLogPolicy::Fail)
            .load_all()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MindmateError>(),
            Some(MindmateError::MoodLog { .. })
        ));

        let log = MoodLog::new(&path, CorruptLogPolicy::TreatAsEmpty);
        assert!(log.load_all()?.is_empty());
        log.append("still here", "joy", at(8, 30))?;
        assert_eq!(log.load_all()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_reads_entries_written_by_other_tools() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("mood_history.json");
        fs::write(
            &path,
            r#"[{"text": "café day", "emotion": "joy", "date": "2023-12-31 23:59"}]"#,
        )?;
        let entries = MoodLog::new(&path, CorruptLogPolicy::Fail).load_all()?;
        assert_eq!(entries[0].text, "café day");
        assert_eq!(entries[0].date, "2023-12-31 23:59");
        Ok(())
    }
}
