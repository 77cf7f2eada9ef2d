// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity models: the raw API shape and the flattened CSV row.

use serde::{Deserialize, Serialize};

/// Summary activity as returned by the athlete activities endpoint.
///
/// Units are Strava's: meters, seconds, meters/second. Optional fields
/// are simply absent from the JSON for some activity types.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivity {
    pub id: u64,
    pub name: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: f64,
    /// Elapsed time in seconds
    pub elapsed_time: f64,
    /// Elevation gain in meters
    pub total_elevation_gain: f64,
    /// Sport type (Ride, Run, Hike, etc.)
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Start date/time (ISO 8601)
    pub start_date: String,
    /// Average speed in m/s
    pub average_speed: f64,
    /// Max speed in m/s
    pub max_speed: f64,
    /// Calories burned, absent on summary records for most types
    #[serde(default)]
    pub calories: Option<f64>,
    /// [latitude, longitude] of the start point, absent for indoor activities
    #[serde(default)]
    pub start_latlng: Option<Vec<f64>>,
}

/// Flattened activity row as written to the CSV dataset.
///
/// Field order is the column order of the output file. Units are
/// normalized: kilometers, hours, km/h.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub id: u64,
    pub name: String,
    /// Distance in kilometers
    pub distance: f64,
    /// Moving time in hours
    pub moving_time: f64,
    /// Elapsed time in hours
    pub elapsed_time: f64,
    /// Elevation gain in meters (unchanged)
    pub total_elevation_gain: f64,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub start_date: String,
    /// Average speed in km/h
    pub average_speed: f64,
    /// Max speed in km/h
    pub max_speed: f64,
    /// Calories burned; 0 when the API omits the field
    pub calories: f64,
    pub start_latitude: Option<f64>,
    pub start_longitude: Option<f64>,
}

impl From<RawActivity> for ActivityRecord {
    fn from(raw: RawActivity) -> Self {
        let start_latitude = raw.start_latlng.as_ref().and_then(|c| c.first().copied());
        let start_longitude = raw.start_latlng.as_ref().and_then(|c| c.get(1).copied());

        Self {
            id: raw.id,
            name: raw.name,
            distance: raw.distance / 1000.0,
            moving_time: raw.moving_time / 3600.0,
            elapsed_time: raw.elapsed_time / 3600.0,
            total_elevation_gain: raw.total_elevation_gain,
            activity_type: raw.activity_type,
            start_date: raw.start_date,
            average_speed: raw.average_speed * 3.6,
            max_speed: raw.max_speed * 3.6,
            calories: raw.calories.unwrap_or(0.0),
            start_latitude,
            start_longitude,
        }
    }
}
