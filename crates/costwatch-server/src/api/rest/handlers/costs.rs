//! Daily cost data handler.

use axum::{
    extract::{Query, State},
    Json,
};
use costwatch_core::DailyCostRecord;
use serde::{Deserialize, Serialize};

use crate::api::rest::state::AppState;

/// Smallest window a caller may request.
pub const MIN_DAYS: u32 = 1;
/// Largest window a caller may request.
pub const MAX_DAYS: u32 = 90;

/// Query parameters for `GET /api/costs`.
#[derive(Debug, Deserialize)]
pub struct CostsQuery {
    pub days: Option<u32>,
}

/// Costs response.
#[derive(Debug, Serialize)]
pub struct CostsResponse {
    pub days: u32,
    pub count: usize,
    pub data: Vec<DailyCostRecord>,
}

/// Return the daily cost series for the requested window.
///
/// The window defaults to the configured length and is clamped to
/// `MIN_DAYS..=MAX_DAYS` before touching the data source.
pub async fn get_costs(
    State(state): State<AppState>,
    Query(query): Query<CostsQuery>,
) -> Json<CostsResponse> {
    let days = query
        .days
        .unwrap_or(state.config.mock.days)
        .clamp(MIN_DAYS, MAX_DAYS);

    let data = state.mock.get(days);

    Json(CostsResponse {
        days,
        count: data.len(),
        data,
    })
}
