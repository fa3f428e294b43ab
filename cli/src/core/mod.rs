//! # MindMate Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The pieces every driver shares:
//! - `config`: configuration loading, merging and validation
//! - `error`: error types and the crate-wide `Result`
//! - `dispatch`: reserved commands checked before classification
//! - `responses`: emotion label to supportive reply
//! - `mood_log`: the persisted JSON mood history
//! - `summary`: per-emotion frequency over the history
//!
//! ```rust
//! use crate::core::{dispatch, responses};
//! use crate::core::mood_log::{CorruptLogPolicy, MoodLog};
//! ```
//!
pub mod config;
pub mod dispatch;
pub mod error;
pub mod mood_log;
pub mod responses;
pub mod summary;
