//! API route table.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, AdvisorState};

/// Build the `/api/v1` router.
pub fn api_routes(state: AdvisorState) -> Router {
    Router::new()
        .route("/system/health", get(handlers::system_health))
        // Assessment
        .route("/validate", post(handlers::validate_form))
        .route("/classify", post(handlers::classify))
        .route("/predict", post(handlers::predict))
        // Dashboard, history & datasets
        .route("/dashboard", get(handlers::dashboard_embed))
        .route("/history", get(handlers::get_history))
        .route("/datasets/:name", get(handlers::get_dataset))
        .with_state(state)
}

/// Unversioned routes kept for simple liveness probes.
pub fn legacy_routes() -> Router {
    Router::new().route("/health", get(handlers::legacy_health_check))
}
