// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - Authorization URL construction
//! - Authorization-code exchange and token refresh
//! - Paginated activity listing

use crate::error::AppError;
use crate::models::{RawActivity, StoredToken};

/// OAuth scopes requested during the interactive flow.
const SCOPES: &str = "read_all,profile:read_all,activity:read_all";

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    auth_base_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://www.strava.com/api/v3".to_string(),
            auth_base_url: "https://www.strava.com/oauth/authorize".to_string(),
            client_id,
            client_secret,
        }
    }

    /// Point the client at a different API base URL (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    // ─── OAuth ───────────────────────────────────────────────────────────────

    /// Build the authorization URL the user approves in their browser.
    ///
    /// `approval_prompt=force` re-prompts even if the app was already
    /// authorized, so a deleted token file always yields a fresh grant.
    pub fn authorize_url(&self, redirect_uri: &str) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&approval_prompt=force&scope={}",
            self.auth_base_url,
            self.client_id,
            urlencoding::encode(redirect_uri),
            urlencoding::encode(SCOPES),
        )
    }

    /// Exchange an authorization code for a credential.
    pub async fn exchange_code(&self, code: &str) -> Result<StoredToken, AppError> {
        let url = format!("{}/oauth/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let reason = response.text().await.unwrap_or_default();
            tracing::error!(status, reason = %reason, "Strava token exchange failed");
            return Err(AppError::TokenExchange { status, reason });
        }

        Ok(response.json().await?)
    }

    /// Refresh an expired access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<StoredToken, AppError> {
        let url = format!("{}/oauth/token", self.base_url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let reason = response.text().await.unwrap_or_default();
            tracing::error!(status, reason = %reason, "Strava token refresh failed");
            return Err(AppError::TokenRefresh { status, reason });
        }

        Ok(response.json().await?)
    }

    // ─── Activities ──────────────────────────────────────────────────────────

    /// Fetch one page of the athlete's activities.
    pub async fn list_activities(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawActivity>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::FetchPage {
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}
