//! # MindMate Mood Summary
//!
//! File: cli/src/core/summary.rs
//!
//! ## Overview
//!
//! Frequency of each emotion label across the mood history. Labels are listed
//! in the order they first appear in the log, so the oldest recurring mood is
//! reported first.
//!
use crate::core::mood_log::MoodEntry;
use serde::Serialize;

/// Widest bar `render` will draw.
pub const MAX_BAR_WIDTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct MoodSummary {
    pub total: usize,
    pub counts: Vec<EmotionCount>,
}

impl MoodSummary {
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        let mut counts: Vec<EmotionCount> = Vec::new();
        for entry in entries {
            match counts.iter_mut().find(|c| c.emotion == entry.emotion) {
                Some(existing) => existing.count += 1,
                None => counts.push(EmotionCount {
                    emotion: entry.emotion.clone(),
                    count: 1,
                }),
            }
        }
        Self {
            total: entries.len(),
            counts,
        }
    }

    /// Text report: one line per label plus a bar scaled to `bar_width`
    /// (clamped to `MAX_BAR_WIDTH`).
    pub fn render(&self, bar_width: usize) -> String {
        let bar_width = bar_width.min(MAX_BAR_WIDTH);
        let mut out = String::from("Your Mood Summary:\n");
        let max = self.counts.iter().map(|c| c.count).max().unwrap_or(0);
        let label_width = self
            .counts
            .iter()
            .map(|c| c.emotion.chars().count())
            .max()
            .unwrap_or(0);

        for c in &self.counts {
            out.push_str(&format!(" - {}: {} times\n", c.emotion, c.count));
        }
        if max > 0 && bar_width > 0 {
            out.push('\n');
            for c in &self.counts {
                // At least one block for any label that occurred.
                let len = (c.count.saturating_mul(bar_width) / max).max(1);
                out.push_str(&format!(
                    "{:<width$} | {} {}\n",
                    c.emotion,
                    "█".repeat(len),
                    c.count,
                    width = label_width
                ));
            }
        }
        out
    }
}
