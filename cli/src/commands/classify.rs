//! # MindMate One-Shot Classification (`mindmate classify`)
//!
//! File: cli/src/commands/classify.rs
//!
//! Classifies a single piece of text and prints the label with its confidence.
//! Useful to check that the configured model is reachable. Nothing is logged.
//!
//! ```bash
//! mindmate classify "I feel very tired and lonely today."
//! mindmate classify --all I am so happy
//! ```
//!
use crate::common::emotion::{self, Classification};
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Text to classify. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Print the score of every label, not just the top one.
    #[arg(long)]
    pub all: bool,
}

pub async fn handle_classify(args: ClassifyArgs, config: &Config) -> Result<()> {
    let classifier = emotion::build_classifier(&config.classifier)?;
    let text = args.text.join(" ");
    info!("Classifying {} characters with {}", text.len(), classifier.name());

    let result = classifier.classify(&text).await?;
    print!("{}", render(&text, &result, args.all));
    Ok(())
}

fn render(text: &str, result: &Classification, all: bool) -> String {
    let mut out = format!(
        "\nText: {}\nEmotion Detected: {}\nConfidence: {:.2}\n",
        text, result.label, result.score
    );
    if all {
        out.push('\n');
        for s in &result.scores {
            out.push_str(&format!("  {:<10} {:.4}\n", s.label, s.score));
        }
    }
    out
}
