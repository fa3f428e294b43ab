//! # MindMate Mood History (`mindmate history`)
//!
//! File: cli/src/commands/history.rs
//!
//! ## Overview
//!
//! Reads the mood log and prints how often each emotion was detected, with a
//! simple text bar chart. `--json` prints the same counts as JSON for other
//! tools.
//!
//! ```bash
//! mindmate history
//! mindmate history --json
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::mood_log::{CorruptLogPolicy, MoodLog};
use crate::core::summary::{MoodSummary, MAX_BAR_WIDTH};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// Width of the longest bar in the chart (0 hides the chart).
    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u16).range(0..=MAX_BAR_WIDTH as i64)
    )]
    pub bar_width: u16,
}

pub async fn handle_history(args: HistoryArgs, config: &Config) -> Result<()> {
    let log = MoodLog::new(config.log_path(), CorruptLogPolicy::Fail);
    debug!("Reading mood history from {}", log.path().display());

    if !log.exists() {
        println!("No mood history found.");
        return Ok(());
    }

    // An empty but existing log still prints the header.
    let summary = MoodSummary::from_entries(&log.load_all()?);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        print!("{}", summary.render(usize::from(args.bar_width)));
    }
    Ok(())
}
