//! # MindMate Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level subcommand. Each defines its own `Args` struct
//! and an async `handle_*` function that receives the parsed arguments and
//! the loaded configuration.
//!
//! - `chat`: interactive console session
//! - `serve`: web chat endpoint
//! - `classify`: classify one piece of text and print the result
//! - `history`: per-emotion summary of the mood log
//!

/// Interactive console chat on stdin/stdout.
pub mod chat;
/// One-shot classification of text given on the command line.
pub mod classify;
/// Mood history summary.
pub mod history;
/// HTTP server exposing `POST /chat`.
pub mod serve;
