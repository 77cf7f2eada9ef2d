// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::config::ConfigError;

/// Application error type for the whole export run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Token exchange failed: HTTP {status}: {reason}")]
    TokenExchange { status: u16, reason: String },

    #[error("Token refresh failed: HTTP {status}: {reason}")]
    TokenRefresh { status: u16, reason: String },

    /// Non-success status while fetching an activity page. Callers treat
    /// this as a truncation signal, not a fatal error.
    #[error("Activity page fetch failed: HTTP {status}")]
    FetchPage { status: u16 },

    #[error("Timed out waiting for the authorization callback")]
    AuthTimeout,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token file serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
