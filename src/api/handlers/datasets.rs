//! Reference dataset endpoint

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use serde::Deserialize;
use tracing::{error, warn};

use super::AdvisorState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::datasets::{self, DatasetKind};

#[derive(Debug, Deserialize)]
pub struct DatasetQuery {
    pub limit: Option<usize>,
}

/// GET /api/v1/datasets/:name?limit=N - First rows of the experiment or geometry table
pub async fn get_dataset(
    State(state): State<AdvisorState>,
    Path(name): Path<String>,
    query: Result<Query<DatasetQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return ApiErrorResponse::bad_request(e.body_text()),
    };
    let Some(kind) = DatasetKind::from_name(&name) else {
        return ApiErrorResponse::not_found(format!("Unknown dataset '{name}'"));
    };

    let max_rows = state.datasets.max_rows;
    let limit = query.limit.unwrap_or(max_rows).min(max_rows);
    let path = state.datasets.path_for(kind).to_path_buf();

    let loaded = tokio::task::spawn_blocking(move || {
        datasets::load_records(&path, limit).map_err(|e| (path, e))
    })
    .await;

    match loaded {
        Ok(Ok(records)) => ApiResponse::ok(records),
        Ok(Err((path, e))) => {
            warn!(dataset = %kind, path = %path.display(), error = %e, "Dataset unavailable");
            ApiErrorResponse::service_unavailable(format!("Dataset '{kind}' is unavailable"))
        }
        Err(e) => {
            error!(dataset = %kind, error = %e, "Dataset load task failed");
            ApiErrorResponse::internal("Dataset load failed")
        }
    }
}
