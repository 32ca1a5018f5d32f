//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration.

use live_score::DEFAULT_BROADCAST_CAPACITY;
use std::net::SocketAddr;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Updates buffered per subscriber before a slow WebSocket client
    /// starts skipping to the newest state
    pub channel_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVER_BIND` is set but not a valid socket
    /// address, or `SERVER_CHANNEL_CAPACITY` is set but not a positive
    /// integer.
    pub fn from_env(bind_override: Option<SocketAddr>) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => match std::env::var("SERVER_BIND") {
                Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "SERVER_BIND".to_string(),
                    reason: format!("not a valid socket address: {raw}"),
                })?,
                Err(_) => default_bind(),
            },
        };

        let channel_capacity = match std::env::var("SERVER_CHANNEL_CAPACITY") {
            Ok(raw) => parse_capacity(&raw)?,
            Err(_) => DEFAULT_BROADCAST_CAPACITY,
        };

        Ok(Self {
            bind,
            channel_capacity,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            channel_capacity: DEFAULT_BROADCAST_CAPACITY,
        }
    }
}

fn default_bind() -> SocketAddr {
    "127.0.0.1:7070"
        .parse()
        .expect("Default bind address is valid")
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    match raw.parse::<usize>() {
        Ok(capacity) if capacity >= 1 => Ok(capacity),
        _ => Err(ConfigError::Invalid {
            var: "SERVER_CHANNEL_CAPACITY".to_string(),
            reason: format!("not a positive integer: {raw}"),
        }),
    }
}
