//! API router configuration.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the main API router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/status", get(handlers::status))
        .route("/costs", get(handlers::get_costs))
        .route("/summary", get(handlers::get_summary))
        .route("/anomalies", get(handlers::list_anomalies))
        .route("/events", post(handlers::ingest_event));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    if state.config.http.enable_cors {
        // Permissive policy for local development; also answers preflight.
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
