// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Only the OAuth client identity is required; everything else has a
//! local-friendly default.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID (public)
    pub client_id: String,
    /// Strava OAuth client secret
    pub client_secret: String,
    /// Local port the OAuth redirect listener binds to
    pub redirect_port: u16,
    /// Path of the persisted token file
    pub token_file: PathBuf,
    /// Directory the CSV dataset is written to
    pub output_dir: PathBuf,
    /// How long to wait for the interactive authorization callback
    pub auth_timeout_secs: u64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            client_id: "test_client_id".to_string(),
            client_secret: "test_secret".to_string(),
            redirect_port: 8000,
            token_file: PathBuf::from("strava_token.json"),
            output_dir: PathBuf::from("."),
            auth_timeout_secs: 300,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            client_id: env::var("CLIENT_ID").map_err(|_| ConfigError::Missing("CLIENT_ID"))?,
            client_secret: env::var("CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("CLIENT_SECRET"))?,
            redirect_port: env::var("REDIRECT_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("REDIRECT_PORT"))?,
            token_file: env::var("TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("strava_token.json")),
            output_dir: env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            auth_timeout_secs: env::var("AUTH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("AUTH_TIMEOUT_SECS"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
