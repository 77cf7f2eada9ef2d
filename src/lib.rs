// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Export: pull a user's activity history into a CSV dataset.
//!
//! This crate handles the Strava OAuth2 authorization-code flow (with
//! token persistence and refresh) and exports the athlete's activities
//! as a timestamped CSV file for downstream analysis.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
