//! # MindMate Web Chat (`mindmate serve`)
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! Serves the chat over HTTP:
//! - `GET /` returns a small chat page
//! - `POST /chat` takes a form field `message` and answers `{"reply": "..."}`
//!
//! ## Architecture
//!
//! - `config.rs`: listen address and CORS resolution
//! - `server_logic.rs`: the Axum router, the `/chat` handler and the server loop
//!
//! ## Examples
//!
//! ```bash
//! mindmate serve
//! mindmate serve --port 8080 --host 0.0.0.0
//! curl -d message="I feel tired" http://127.0.0.1:5000/chat
//! ```
//!
use crate::common::emotion;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::mood_log::{CorruptLogPolicy, MoodLog};
use std::sync::Arc;
use tracing::info;

pub use config::ServeArgs;

/// Listen address and CORS resolution for the web server.
pub mod config;

/// Axum router, request handlers and server lifecycle.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Builds the classifier and mood log once, then hands them to the router as
/// shared state. The web driver tolerates an unreadable history file: it is
/// treated as empty and replaced on the next write.
pub async fn handle_serve(args: ServeArgs, config: &Config) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let server_config = config::ServerConfig::resolve(&args, &config.server);
    info!("Effective server config: {:?}", server_config);

    let state = server_logic::AppState {
        classifier: emotion::build_classifier(&config.classifier)?,
        log: Arc::new(MoodLog::new(
            config.log_path(),
            CorruptLogPolicy::TreatAsEmpty,
        )),
    };

    server_logic::run_server(server_config, state).await
}
