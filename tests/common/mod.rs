// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: an in-process mock of the Strava API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One page served by the mock activities endpoint. Requests beyond the
/// configured pages get an empty page.
#[derive(Clone)]
#[allow(dead_code)]
pub enum Page {
    Activities(serde_json::Value),
    Error(u16),
}

#[derive(Clone)]
struct MockState {
    pages: Arc<Vec<Page>>,
    token_response: Arc<serde_json::Value>,
    token_status: u16,
    token_calls: Arc<AtomicUsize>,
    activity_calls: Arc<AtomicUsize>,
}

/// Handle to a running mock Strava server.
pub struct MockStrava {
    pub base_url: String,
    token_calls: Arc<AtomicUsize>,
    activity_calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockStrava {
    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn activity_calls(&self) -> usize {
        self.activity_calls.load(Ordering::SeqCst)
    }
}

/// Spawn a mock Strava API on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_mock_strava(
    pages: Vec<Page>,
    token_response: serde_json::Value,
    token_status: u16,
) -> MockStrava {
    let token_calls = Arc::new(AtomicUsize::new(0));
    let activity_calls = Arc::new(AtomicUsize::new(0));

    let state = MockState {
        pages: Arc::new(pages),
        token_response: Arc::new(token_response),
        token_status,
        token_calls: token_calls.clone(),
        activity_calls: activity_calls.clone(),
    };

    let app = Router::new()
        .route("/oauth/token", post(token_endpoint))
        .route("/athlete/activities", get(activities_endpoint))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Failed to get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });

    MockStrava {
        base_url: format!("http://{}", addr),
        token_calls,
        activity_calls,
    }
}

async fn token_endpoint(State(state): State<MockState>) -> Response {
    state.token_calls.fetch_add(1, Ordering::SeqCst);

    if state.token_status != 200 {
        let status = StatusCode::from_u16(state.token_status).unwrap();
        return (status, Json(serde_json::json!({"message": "Bad Request"}))).into_response();
    }

    Json(state.token_response.as_ref().clone()).into_response()
}

#[derive(Deserialize)]
struct ListParams {
    page: usize,
    #[allow(dead_code)]
    per_page: usize,
}

async fn activities_endpoint(
    State(state): State<MockState>,
    Query(params): Query<ListParams>,
) -> Response {
    state.activity_calls.fetch_add(1, Ordering::SeqCst);

    match state.pages.get(params.page - 1) {
        Some(Page::Activities(activities)) => Json(activities.clone()).into_response(),
        Some(Page::Error(status)) => StatusCode::from_u16(*status).unwrap().into_response(),
        None => Json(serde_json::json!([])).into_response(),
    }
}

/// A minimal raw activity JSON object with the given id.
#[allow(dead_code)]
pub fn activity_json(id: u64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("Activity {}", id),
        "distance": 10000.0,
        "moving_time": 3600,
        "elapsed_time": 3900,
        "total_elevation_gain": 120.0,
        "type": "Ride",
        "start_date": "2026-08-01T07:00:00Z",
        "average_speed": 10.0,
        "max_speed": 15.0,
        "calories": 500.0,
        "start_latlng": [37.4, -122.2]
    })
}
