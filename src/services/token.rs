// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token lifecycle management.
//!
//! Produces a currently-valid access token by (in order of preference)
//! reusing the persisted credential, refreshing it, or running the
//! interactive authorization-code flow with a local callback listener.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::StoredToken;
use crate::services::callback::CallbackServer;
use crate::services::strava::StravaClient;

/// Manages the OAuth credential: persistence, refresh, interactive flow.
pub struct TokenManager {
    client: StravaClient,
    token_file: PathBuf,
    redirect_port: u16,
    auth_timeout: Duration,
}

impl TokenManager {
    pub fn new(client: StravaClient, config: &Config) -> Self {
        Self {
            client,
            token_file: config.token_file.clone(),
            redirect_port: config.redirect_port,
            auth_timeout: Duration::from_secs(config.auth_timeout_secs),
        }
    }

    /// Get a valid (non-expired) access token.
    ///
    /// 1. A persisted credential outside the refresh margin is returned
    ///    as-is, with zero network calls.
    /// 2. An expiring/expired credential is refreshed and the replacement
    ///    persisted before returning.
    /// 3. With no persisted credential, the interactive flow runs.
    pub async fn get_valid_access_token(&self) -> Result<String> {
        if let Some(token) = self.load()? {
            let now = chrono::Utc::now().timestamp();

            if token.is_fresh(now) {
                tracing::debug!("Persisted access token still valid, reusing");
                return Ok(token.access_token);
            }

            tracing::info!("Access token expired or expiring soon, refreshing");
            let new_token = self.client.refresh_token(&token.refresh_token).await?;
            self.store(&new_token)?;
            tracing::info!("Token refreshed and persisted");
            return Ok(new_token.access_token);
        }

        self.authorize_interactive().await
    }

    /// Run the interactive authorization-code flow.
    ///
    /// Starts the local redirect listener, opens the authorization URL in
    /// a browser, waits for the code (bounded by the configured timeout),
    /// exchanges it and persists the resulting credential.
    async fn authorize_interactive(&self) -> Result<String> {
        let server = CallbackServer::bind(self.redirect_port).await?;
        let redirect_uri = format!("http://localhost:{}/callback", server.local_addr().port());
        let auth_url = self.client.authorize_url(&redirect_uri);

        tracing::info!(url = %auth_url, "Opening browser for Strava authorization");
        if let Err(e) = open::that(&auth_url) {
            // Not fatal: the user can still open the logged URL by hand
            tracing::warn!(error = %e, "Could not open a browser, open the URL manually");
        }

        tracing::info!(
            timeout_secs = self.auth_timeout.as_secs(),
            "Waiting for authorization callback"
        );
        let code = server.wait_for_code(self.auth_timeout).await?;

        let token = self.client.exchange_code(&code).await?;
        self.store(&token)?;
        tracing::info!("Authorization complete, credential persisted");

        Ok(token.access_token)
    }

    /// Load the persisted credential, if any.
    ///
    /// A missing file means no credential. A corrupt file is treated the
    /// same way (with a warning) so the interactive flow can recover.
    pub fn load(&self) -> Result<Option<StoredToken>> {
        let contents = match fs::read_to_string(&self.token_file) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Io(e)),
        };

        match serde_json::from_str(&contents) {
            Ok(token) => Ok(Some(token)),
            Err(e) => {
                tracing::warn!(
                    path = %self.token_file.display(),
                    error = %e,
                    "Token file unreadable, treating as absent"
                );
                Ok(None)
            }
        }
    }

    /// Persist the credential, overwriting any previous one.
    pub fn store(&self, token: &StoredToken) -> Result<()> {
        let json = serde_json::to_string_pretty(token)?;
        fs::write(&self.token_file, json)?;
        Ok(())
    }
}
