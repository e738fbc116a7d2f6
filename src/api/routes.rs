//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

/// Creates the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Statistics
        .route("/api/v1/stats", get(handlers::get_stats))
        // Legs
        .route("/api/v1/legs/validate", post(handlers::validate_leg_inputs))
        // Combinations
        .route("/api/v1/combinations/catalog", get(handlers::get_catalog))
        .route(
            "/api/v1/combinations/calculate",
            post(handlers::calculate_combinations),
        )
        .with_state(state)
}
