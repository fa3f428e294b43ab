//! # MindMate Console Chat (`mindmate chat`)
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! An interactive read-evaluate loop on standard input. Each line is either a
//! reserved command (see `core::dispatch`) or a message to classify:
//!
//! 1. Print the `You: ` prompt and read one line
//! 2. `bye` / `quit` / `exit` (or end of input) ends the session
//! 3. `breath`, `journal` and greetings print their fixed text
//! 4. Anything else is classified, appended to the mood log, and answered
//!    with the detected label and the matching supportive reply
//!
//! ## Examples
//!
//! ```bash
//! mindmate chat
//! mindmate --classifier lexicon --log-file ~/journal/moods.json chat
//! ```
//!
//! A mood history that exists but cannot be parsed ends the session with an
//! error. A classifier failure only skips the current message.
//!
use crate::common::emotion::{self, EmotionClassifier};
use crate::core::config::Config;
use crate::core::dispatch::{self, Command};
use crate::core::error::Result;
use crate::core::mood_log::{CorruptLogPolicy, MoodLog};
use crate::core::responses;
use chrono::Local;
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Skip the welcome banner.
    #[arg(long)]
    pub quiet: bool,
}

pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let classifier = emotion::build_classifier(&config.classifier)?;
    let log = MoodLog::new(config.log_path(), CorruptLogPolicy::Fail);
    info!(
        "Starting console chat with classifier {} logging to {}",
        classifier.name(),
        log.path().display()
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let logged = run_session(stdin, &mut stdout, classifier.as_ref(), &log, !args.quiet).await?;
    info!("Console chat ended after {} logged messages", logged);
    Ok(())
}

/// Runs one chat session and returns how many messages were logged.
pub async fn run_session<R, W>(
    input: R,
    out: &mut W,
    classifier: &dyn EmotionClassifier,
    log: &MoodLog,
    banner: bool,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if banner {
        writeln!(out, "\nMindMate AI (Console Version) 💙")?;
        writeln!(out, "Type 'bye' to exit.\n")?;
    }

    let mut lines = input.lines();
    let mut logged = 0;
    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out, "\nBot: {}", dispatch::FAREWELL)?;
            break;
        };
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        match dispatch::dispatch(message) {
            Some(Command::Exit) => {
                writeln!(out, "Bot: {}", dispatch::FAREWELL)?;
                break;
            }
            Some(command) => {
                writeln!(out, "\n{}\n", command.reply())?;
                continue;
            }
            None => {}
        }

        let classification = match classifier.classify(message).await {
            Ok(c) => c,
            Err(e) => {
                warn!("Classification failed: {:#}", e);
                writeln!(
                    out,
                    "Bot: I couldn't make sense of that one just now ({}). Could you try again?\n",
                    e
                )?;
                continue;
            }
        };

        log.append(message, &classification.label, Local::now().naive_local())?;
        logged += 1;

        writeln!(
            out,
            "\n✨ Emotion Detected: {}",
            classification.label.to_uppercase()
        )?;
        writeln!(out, "🤍 Response:")?;
        writeln!(out, "{}\n", responses::select(&classification.label))?;
    }
    Ok(logged)
}
