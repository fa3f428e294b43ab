//! # MindMate Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates MindMate's configuration. Every
//! setting has a working default, so no configuration file is required.
//!
//! Configuration sources (lowest to highest precedence):
//! 1. Default values defined in the code
//! 2. User-specific `<config dir>/mindmate/config.toml`
//! 3. Project-specific `.mindmate.toml` in the current directory or ancestors
//! 4. Environment variables and command-line flags (`Overrides`)
//!
//! ## Examples
//!
//! ```toml
//! [log]
//! path = "~/journal/mood_history.json"
//!
//! [classifier]
//! backend = "lexicon"
//!
//! [server]
//! port = 8080
//! ```
//!
//! ```rust
//! let cfg = config::load_config(&overrides)?;
//! let log = MoodLog::new(cfg.log_path(), CorruptLogPolicy::Fail);
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{MindmateError, Result};
use anyhow::{anyhow, Context};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".mindmate.toml";

/// Which emotion classifier implementation to construct.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// Hosted pretrained model addressed by its identifier.
    Huggingface,
    /// Offline keyword matcher.
    Lexicon,
}

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub server: ServerDefaults,
}

/// Where the mood history is persisted.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Path of the JSON mood history (can use ~). Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_log_path")]
    pub path: String,
}

/// Settings for the emotion classifier.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    #[serde(default = "default_backend")]
    pub backend: ClassifierBackend,
    /// Pretrained model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL of the inference endpoint; the model id is appended.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Name of the environment variable holding the API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

/// Defaults for `mindmate serve`; command-line flags take precedence.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServerDefaults {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub log_file: Option<PathBuf>,
    pub classifier: Option<ClassifierBackend>,
    pub model: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            model: default_model(),
            api_url: default_api_url(),
            token_env: default_token_env(),
        }
    }
}

impl Default for ServerDefaults {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: false,
        }
    }
}

impl Config {
    /// The resolved mood history location.
    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log.path)
    }
}

fn default_log_path() -> String {
    "mood_history.json".to_string()
}
fn default_backend() -> ClassifierBackend {
    ClassifierBackend::Huggingface
}
fn default_model() -> String {
    "bhadresh-savani/distilbert-base-uncased-emotion".to_string()
}
fn default_api_url() -> String {
    "https://router.huggingface.co/hf-inference/models".to_string()
}
fn default_token_env() -> String {
    "HF_TOKEN".to_string()
}
fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}
fn default_port() -> u16 {
    5000
}

pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "MindMate", "mindmate") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.mindmate.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

// A project value wins only when it differs from the built-in default.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.log.path = if project_cfg.log.path != default_log_path() {
        project_cfg.log.path
    } else {
        user.log.path
    };
    merged.classifier.backend = if project_cfg.classifier.backend != default_backend() {
        project_cfg.classifier.backend
    } else {
        user.classifier.backend
    };
    merged.classifier.model = if project_cfg.classifier.model != default_model() {
        project_cfg.classifier.model
    } else {
        user.classifier.model
    };
    merged.classifier.api_url = if project_cfg.classifier.api_url != default_api_url() {
        project_cfg.classifier.api_url
    } else {
        user.classifier.api_url
    };
    merged.classifier.token_env = if project_cfg.classifier.token_env != default_token_env() {
        project_cfg.classifier.token_env
    } else {
        user.classifier.token_env
    };
    merged.server.host = if project_cfg.server.host != default_host() {
        project_cfg.server.host
    } else {
        user.server.host
    };
    merged.server.port = if project_cfg.server.port != default_port() {
        project_cfg.server.port
    } else {
        user.server.port
    };
    merged.server.enable_cors = project_cfg.server.enable_cors || user.server.enable_cors;
    merged
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(path) = &overrides.log_file {
        debug!("Log file overridden to {}", path.display());
        config.log.path = path.to_string_lossy().into_owned();
    }
    if let Some(backend) = overrides.classifier {
        debug!("Classifier backend overridden to {:?}", backend);
        config.classifier.backend = backend;
    }
    if let Some(model) = &overrides.model {
        config.classifier.model = model.clone();
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    config.log.path = shellexpand::tilde(&config.log.path).into_owned();
    debug!("Expanded mood log path: {}", config.log.path);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.log.path.trim().is_empty() {
        return Err(anyhow!(MindmateError::Config(
            "log.path must not be empty.".to_string()
        )));
    }
    let log_path = config.log_path();
    if log_path.is_dir() {
        return Err(anyhow!(MindmateError::Config(format!(
            "Configured mood log '{}' is a directory.",
            log_path.display()
        ))));
    }
    if config.classifier.model.trim().is_empty() {
        return Err(anyhow!(MindmateError::Config(
            "classifier.model must not be empty.".to_string()
        )));
    }
    let api_url = &config.classifier.api_url;
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        return Err(anyhow!(MindmateError::Config(format!(
            "Invalid classifier.api_url '{}'. Expected an http:// or https:// URL.",
            api_url
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
