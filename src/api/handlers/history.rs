//! Prediction history endpoint

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use super::AdvisorState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::config::defaults::{HISTORY_DEFAULT_LIMIT, HISTORY_MAX_LIMIT};
use crate::storage::HistoryEntry;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub entries: Vec<HistoryEntry>,
}

/// GET /api/v1/history?limit=N - Recent predictions, newest first
pub async fn get_history(
    State(state): State<AdvisorState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return ApiErrorResponse::bad_request(e.body_text()),
    };
    let Some(history) = state.session.history() else {
        return ApiErrorResponse::service_unavailable("Prediction history is disabled");
    };

    let limit = query
        .limit
        .unwrap_or(HISTORY_DEFAULT_LIMIT)
        .min(HISTORY_MAX_LIMIT);

    ApiResponse::ok(HistoryResponse {
        total: history.count(),
        entries: history.recent(limit),
    })
}
