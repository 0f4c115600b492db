//! Cost summary handler.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::rest::state::AppState;
use crate::mock::round2;

/// Summary response.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_cost: f64,
    pub daily_average: f64,
    pub days: usize,
    pub services: BTreeMap<String, f64>,
}

/// Aggregate cost statistics over the configured window.
pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let data = state.mock.get(state.config.mock.days);

    let total: f64 = data.iter().map(|d| d.total_cost).sum();
    let daily_average = if data.is_empty() {
        0.0
    } else {
        total / data.len() as f64
    };

    let mut services: BTreeMap<String, f64> = BTreeMap::new();
    for day in &data {
        for (name, cost) in &day.services {
            *services.entry(name.clone()).or_insert(0.0) += cost;
        }
    }
    for cost in services.values_mut() {
        *cost = round2(*cost);
    }

    Json(SummaryResponse {
        total_cost: round2(total),
        daily_average: round2(daily_average),
        days: data.len(),
        services,
    })
}
