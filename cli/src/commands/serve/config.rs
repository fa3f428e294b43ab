//! # MindMate Web Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Resolves where `mindmate serve` listens. Settings come from:
//! 1. Command-line arguments (highest priority)
//! 2. The `[server]` section of the loaded configuration
//! 3. Default values (lowest priority, `127.0.0.1:5000`)
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! enable_cors = true
//! ```
//!
use crate::core::config::ServerDefaults;
use clap::Parser;
use std::net::IpAddr;

/// # Serve Command Arguments (`ServeArgs`)
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on (default from config, otherwise 5000).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind. Use `0.0.0.0` to accept connections from other machines.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Send permissive CORS headers so other origins can call `/chat`.
    #[arg(long)]
    pub cors: bool,
}

/// Effective settings for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

impl ServerConfig {
    pub fn resolve(args: &ServeArgs, defaults: &ServerDefaults) -> Self {
        Self {
            host: args.host.unwrap_or(defaults.host),
            port: args.port.unwrap_or(defaults.port),
            enable_cors: args.cors || defaults.enable_cors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_flags() {
        let config = ServerConfig::resolve(&ServeArgs::default(), &ServerDefaults::default());
        assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.port, 5000);
        assert!(!config.enable_cors);
    }

    #[test]
    fn test_flags_override_config() {
        let defaults = ServerDefaults {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            enable_cors: false,
        };
        let args = ServeArgs::parse_from(["serve", "--port", "9000", "--cors"]);

        let config = ServerConfig::resolve(&args, &defaults);

        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.port, 9000);
        assert!(config.enable_cors);
    }
}
