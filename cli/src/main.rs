//! # MindMate Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the MindMate CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and routing to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Talk in the terminal
//! mindmate chat
//!
//! # Serve the web chat with debug logging
//! mindmate -vv serve --port 8080
//!
//! # Summarise the mood history kept in a custom location
//! mindmate --log-file ~/journal/moods.json history
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (files, environment, flags)
//! 4. Route to the command handler and report any error
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Subcommand handlers (chat, serve, classify, history)
mod common; // Shared utilities (emotion classifiers, fs)
mod core; // Core infrastructure (config, errors, replies, mood log)

use crate::core::config::{self, ClassifierBackend, Overrides};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "mindmate",
    about = "💙 MindMate: emotion-aware supportive chat with a local mood journal",
    long_about = "Talk to MindMate in the terminal or over HTTP. Each message is classified\n\
                  by a pretrained emotion model, answered with a supportive reply and\n\
                  recorded in a local JSON mood history.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mood history file (overrides `[log] path`).
    #[arg(long, global = true, env = "MINDMATE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Emotion classifier backend (overrides `[classifier] backend`).
    #[arg(long, global = true, value_enum, env = "MINDMATE_CLASSIFIER")]
    classifier: Option<ClassifierBackend>,

    /// Pretrained model identifier (overrides `[classifier] model`).
    #[arg(long, global = true, env = "MINDMATE_MODEL")]
    model: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Chat in the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Serve the web chat and `POST /chat` endpoint.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Classify a single message and print the detected emotion.
    Classify(commands::classify::ClassifyArgs),
    /// Summarise the mood history.
    #[command(alias = "h")]
    History(commands::history::HistoryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let overrides = Overrides {
        log_file: cli.log_file,
        classifier: cli.classifier,
        model: cli.model,
    };

    let command_result = match config::load_config(&overrides) {
        Ok(cfg) => match cli.command {
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg).await,
            Commands::Serve(args) => commands::serve::handle_serve(args, &cfg).await,
            Commands::Classify(args) => commands::classify::handle_classify(args, &cfg).await,
            Commands::History(args) => commands::history::handle_history(args, &cfg).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
