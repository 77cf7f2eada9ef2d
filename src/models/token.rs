// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Persisted OAuth credential model.

use serde::{Deserialize, Serialize};

/// Margin before token expiration when we proactively refresh (5 minutes).
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 5 * 60;

/// OAuth credential as persisted to the token file.
///
/// Overwritten wholesale on every acquisition or refresh; never deleted
/// by the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) when the access token expires
    pub expires_at: i64,
}

impl StoredToken {
    /// Whether the access token is still usable at `now` (unix seconds),
    /// accounting for the refresh margin. A token failing this check must
    /// be refreshed before any API call.
    pub fn is_fresh(&self, now: i64) -> bool {
        self.expires_at > now + TOKEN_REFRESH_MARGIN_SECS
    }
}
