// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Service layer: Strava API client, token lifecycle, fetch and export.

pub mod activity;
pub mod callback;
pub mod export;
pub mod strava;
pub mod token;

pub use callback::CallbackServer;
pub use strava::StravaClient;
pub use token::TokenManager;
