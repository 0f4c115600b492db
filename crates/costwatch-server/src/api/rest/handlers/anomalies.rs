//! Anomaly detection handler.

use axum::{
    extract::{Query, State},
    Json,
};
use costwatch_core::{detect_anomalies, AnomalyRecord, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::api::rest::state::AppState;
use crate::error::ApiResult;

/// Lowest threshold a caller may request.
pub const MIN_THRESHOLD: f64 = 1.0;
/// Highest threshold a caller may request.
pub const MAX_THRESHOLD: f64 = 5.0;

/// Query parameters for `GET /api/anomalies`.
#[derive(Debug, Deserialize)]
pub struct AnomaliesQuery {
    pub threshold: Option<f64>,
}

/// Anomalies response.
#[derive(Debug, Serialize)]
pub struct AnomaliesResponse {
    pub count: usize,
    pub threshold: f64,
    pub data: Vec<AnomalyRecord>,
}

/// Run detection over the current cost window.
///
/// The threshold is clamped to `MIN_THRESHOLD..=MAX_THRESHOLD` here, at the
/// presentation boundary; the core never clamps. A NaN survives `clamp` and
/// is rejected by the core as an invalid threshold.
pub async fn list_anomalies(
    State(state): State<AppState>,
    Query(query): Query<AnomaliesQuery>,
) -> ApiResult<Json<AnomaliesResponse>> {
    let threshold = query
        .threshold
        .unwrap_or(DEFAULT_THRESHOLD)
        .clamp(MIN_THRESHOLD, MAX_THRESHOLD);

    let data = state.mock.get(state.config.mock.days);
    let anomalies = detect_anomalies(&data, threshold)?;

    Ok(Json(AnomaliesResponse {
        count: anomalies.len(),
        threshold,
        data: anomalies,
    }))
}
