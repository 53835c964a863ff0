//! Service health endpoints

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use super::AdvisorState;
use crate::api::envelope::ApiResponse;

/// Legacy health payload, same shape as the model service's own `/health`.
#[derive(Debug, Serialize)]
pub struct LegacyHealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn legacy_health_check() -> Json<LegacyHealthResponse> {
    Json(LegacyHealthResponse {
        status: "Prediction advisor is running",
    })
}

#[derive(Debug, Serialize)]
pub struct SystemHealth {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub prediction_endpoint: String,
    pub history_enabled: bool,
}

/// GET /api/v1/system/health
pub async fn system_health(State(state): State<AdvisorState>) -> Response {
    ApiResponse::ok(SystemHealth {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        prediction_endpoint: state.session.endpoint().to_string(),
        history_enabled: state.session.history().is_some(),
    })
}
