//! Service status handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::rest::state::AppState;

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub events_ingested: usize,
}

/// Service status endpoint.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let events_ingested = state.events.read().await.len();

    Json(StatusResponse {
        status: "ok".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
        started_at: state.started_at,
        events_ingested,
    })
}
