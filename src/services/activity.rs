// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Paginated activity fetching.

use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::RawActivity;
use crate::services::strava::StravaClient;

/// Activities requested per page.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Upper bound on pages fetched in one run.
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Pause between page requests to stay under Strava's rate limit.
const PAGE_DELAY: Duration = Duration::from_millis(100);

/// Fetch the athlete's activities one page at a time, in request order.
///
/// Stops at the first empty page or after `max_pages` pages. A non-success
/// response truncates the list to the pages already fetched and is logged,
/// not propagated: a partial export beats none.
pub async fn fetch_activities(
    client: &StravaClient,
    access_token: &str,
    per_page: u32,
    max_pages: u32,
) -> Result<Vec<RawActivity>> {
    let mut activities = Vec::new();
    let mut page = 1;

    while page <= max_pages {
        let batch = match client.list_activities(access_token, page, per_page).await {
            Ok(batch) => batch,
            Err(AppError::FetchPage { status }) => {
                tracing::warn!(
                    status,
                    page,
                    fetched = activities.len(),
                    "Error fetching activity page, keeping pages already fetched"
                );
                break;
            }
            Err(e) => return Err(e),
        };

        if batch.is_empty() {
            break;
        }

        tracing::debug!(page, count = batch.len(), "Fetched activity page");
        activities.extend(batch);
        page += 1;

        tokio::time::sleep(PAGE_DELAY).await;
    }

    Ok(activities)
}
