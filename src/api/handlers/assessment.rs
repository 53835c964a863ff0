//! Propeller assessment endpoints: validate, classify, predict

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AdvisorState;
use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::prediction::{SessionError, DEFAULT_SESSION_KEY};
use crate::recommendation::{self, ClassifierInput};
use crate::types::{FormInput, GuidanceResult, RawFormInput};
use crate::validation;

// ============================================================================
// Validate
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub guidance: GuidanceResult,
    pub has_invalid_input: bool,
}

/// POST /api/v1/validate - Guidance for the current form values
pub async fn validate_form(payload: Result<Json<RawFormInput>, JsonRejection>) -> Response {
    let Json(raw) = match payload {
        Ok(p) => p,
        Err(e) => return ApiErrorResponse::bad_request(e.body_text()),
    };

    let guidance = validation::validate_form(&FormInput::parse(&raw));
    ApiResponse::ok(ValidateResponse {
        has_invalid_input: validation::has_invalid_input(&guidance),
        guidance,
    })
}

// ============================================================================
// Classify
// ============================================================================

/// POST /api/v1/classify - Recommendation for known coefficients
pub async fn classify(payload: Result<Json<ClassifierInput>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(input)) => ApiResponse::ok(recommendation::classify_input(&input)),
        Err(e) => ApiErrorResponse::bad_request(e.body_text()),
    }
}

// ============================================================================
// Predict
// ============================================================================

/// Form values plus the caller's session key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictPayload {
    #[serde(flatten)]
    pub form: RawFormInput,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// POST /api/v1/predict - Validate, call the prediction service, classify
pub async fn predict(
    State(state): State<AdvisorState>,
    payload: Result<Json<PredictPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ApiErrorResponse::bad_request(e.body_text()),
    };
    let session_key = payload
        .session_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION_KEY);

    match state.session.submit(session_key, &payload.form).await {
        Ok(report) => ApiResponse::ok(report),
        Err(SessionError::Rejected(guidance)) => {
            let details = match serde_json::to_value(&guidance) {
                Ok(v) => v,
                Err(e) => {
                    error!(error = %e, "Failed to serialize guidance");
                    return ApiErrorResponse::internal("Failed to serialize guidance");
                }
            };
            ApiErrorResponse::invalid_input(
                "Prediction is enabled only for values within the trained data range.",
                details,
            )
        }
        Err(e @ SessionError::Busy(_)) => ApiErrorResponse::busy(e.to_string()),
        Err(e @ SessionError::Prediction(_)) => ApiErrorResponse::prediction_failed(e.to_string()),
    }
}
