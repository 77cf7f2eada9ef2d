// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Flatten raw activities and write the CSV dataset.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{ActivityRecord, RawActivity};

/// Flatten the raw activities into the fixed row schema and write them to
/// a timestamped CSV file in `out_dir`.
///
/// Returns the in-memory dataset in the same order the activities were
/// fetched, plus the path written.
pub fn process_activities(
    raw: Vec<RawActivity>,
    out_dir: &Path,
) -> Result<(Vec<ActivityRecord>, PathBuf)> {
    let records: Vec<ActivityRecord> = raw.into_iter().map(ActivityRecord::from).collect();

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let path = out_dir.join(format!("strava_activities_{}.csv", timestamp));

    let mut writer = csv::Writer::from_path(&path)?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "Dataset written"
    );

    Ok((records, path))
}
