//! # MindMate HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! The Axum application behind `mindmate serve`:
//! - `GET /`: the embedded chat page
//! - `POST /chat`: form field `message`, JSON answer `{"reply": "..."}`
//!
//! The message is trimmed and lowercased first. Reserved commands and
//! greetings are answered directly; everything else is classified, logged and
//! answered with the reply for the detected emotion.
//!
//! ## Concurrency
//!
//! Handlers run concurrently and share one `MoodLog`. Appends are not
//! serialized, so simultaneous requests can overwrite each other's entry.
//!
//! ## Startup
//!
//! 1. Find an available port, starting at the configured one
//! 2. Build the router with tracing (and optionally CORS) middleware
//! 3. Serve until Ctrl+C or SIGTERM
//!
use super::config::ServerConfig;
use crate::common::emotion::EmotionClassifier;
use crate::core::dispatch;
use crate::core::error::Result;
use crate::core::mood_log::MoodLog;
use crate::core::responses;
use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const INDEX_HTML: &str = include_str!("index.html");

/// Shared handler state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn EmotionClassifier>,
    pub log: Arc<MoodLog>,
}

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    fn json(reply: &str) -> Json<Self> {
        Json(Self {
            reply: reply.to_string(),
        })
    }
}

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port at or after `config.port` and serves the chat
/// application until a shutdown signal arrives.
pub async fn run_server(config: ServerConfig, state: AppState) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;
    let log_path = state.log.path().display().to_string();
    let model = state.classifier.name().to_string();

    let app = create_app(state, config.enable_cors);

    println!("\n=================================================================");
    println!("💙 MindMate web chat");
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("🧠 Emotion model:     {}", model);
    println!("📒 Mood log:          {}", log_path);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");
    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, initiating graceful shutdown...");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Tries `start_port`, then each following port, up to `max_attempts` ports.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// Builds the router with its middleware stack.
fn create_app(state: AppState, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default())
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn chat(
    State(state): State<AppState>,
    Form(form): Form<ChatForm>,
) -> (StatusCode, Json<ChatReply>) {
    let message = dispatch::normalize(&form.message);

    if let Some(command) = dispatch::dispatch(&message) {
        return (StatusCode::OK, ChatReply::json(command.reply()));
    }

    let classification = match state.classifier.classify(&message).await {
        Ok(c) => c,
        Err(e) => {
            error!("Classification failed: {:#}", e);
            return (
                StatusCode::BAD_GATEWAY,
                ChatReply::json(responses::FALLBACK_REPLY),
            );
        }
    };

    let log = Arc::clone(&state.log);
    let emotion = classification.label.clone();
    let now = Local::now().naive_local();
    let logged =
        tokio::task::spawn_blocking(move || log.append(&message, &emotion, now)).await;
    match logged {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => {
            error!("Failed to record mood entry: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                ChatReply::json(responses::FALLBACK_REPLY),
            );
        }
        Err(e) => {
            error!("Mood log task failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                ChatReply::json(responses::FALLBACK_REPLY),
            );
        }
    }

    (
        StatusCode::OK,
        ChatReply::json(responses::select(&classification.label)),
    )
}
