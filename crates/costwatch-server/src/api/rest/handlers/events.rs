//! Cost event ingestion.
//!
//! Accepted events land in an in-memory store for the life of the process.
//! Wire field names are camelCase, matching the collectors that post here.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};

/// Incoming cost event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEventRequest {
    #[serde(default = "default_subscription")]
    pub subscription_id: String,
    pub ts: DateTime<Utc>,
    pub service: String,
    pub resource_group: String,
    #[serde(default = "default_region")]
    pub region: String,
    pub cost_usd: f64,
    #[serde(default)]
    pub usage_qty: Option<f64>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

fn default_subscription() -> String {
    "demo".to_string()
}

fn default_region() -> String {
    "unknown".to_string()
}

/// A cost event accepted into the store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestedEvent {
    pub id: String,
    pub subscription_id: String,
    pub ts: DateTime<Utc>,
    pub date: NaiveDate,
    pub service: String,
    pub resource_group: String,
    pub region: String,
    pub cost_usd: f64,
    pub usage_qty: Option<f64>,
    pub tags: BTreeMap<String, String>,
}

/// Ingest response.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub ok: bool,
    pub id: String,
}

/// Ingest a single cost event.
pub async fn ingest_event(
    State(state): State<AppState>,
    Json(req): Json<CostEventRequest>,
) -> ApiResult<Json<IngestResponse>> {
    if !req.cost_usd.is_finite() || req.cost_usd < 0.0 {
        return Err(ApiError::Validation(format!(
            "costUsd {} must be a non-negative finite number",
            req.cost_usd
        )));
    }
    if req.service.trim().is_empty() {
        return Err(ApiError::Validation("service is required".to_string()));
    }

    let event = IngestedEvent {
        id: format!(
            "evt_{}_{}_{}",
            req.ts.to_rfc3339(),
            req.service,
            req.resource_group
        ),
        date: req.ts.date_naive(),
        subscription_id: req.subscription_id,
        ts: req.ts,
        service: req.service,
        resource_group: req.resource_group,
        region: req.region,
        cost_usd: req.cost_usd,
        usage_qty: req.usage_qty,
        tags: req.tags,
    };

    let id = event.id.clone();
    state.events.write().await.push(event);
    info!(id = %id, "cost event ingested");

    Ok(Json(IngestResponse { ok: true, id }))
}
