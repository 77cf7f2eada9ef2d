// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Export CLI
//!
//! Authorizes against Strava (reusing or refreshing a persisted token
//! where possible), fetches the athlete's activity history and writes it
//! to a timestamped CSV file.

use strava_export::{
    config::Config,
    error::Result,
    services::{
        activity::{self, DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE},
        export, StravaClient, TokenManager,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    init_logging();

    // Single top-level catch: log the failure, exit cleanly
    if let Err(e) = run().await {
        tracing::error!(error = %e, "Export run failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    tracing::info!("Starting Strava export");

    let client = StravaClient::new(config.client_id.clone(), config.client_secret.clone());

    // Token Manager produces the credential; the fetcher consumes it
    let token_manager = TokenManager::new(client.clone(), &config);
    let access_token = token_manager.get_valid_access_token().await?;

    let raw =
        activity::fetch_activities(&client, &access_token, DEFAULT_PER_PAGE, DEFAULT_MAX_PAGES)
            .await?;
    tracing::info!(count = raw.len(), "Retrieved activities");

    let (dataset, path) = export::process_activities(raw, &config.output_dir)?;
    tracing::info!(path = %path.display(), "Data saved");

    if let Some(first) = dataset.first() {
        tracing::info!(
            id = first.id,
            name = %first.name,
            activity_type = %first.activity_type,
            distance_km = first.distance,
            "Sample of first activity"
        );
    }

    Ok(())
}

/// Initialize logging with an env-filter and compact CLI-friendly output.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_export=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
