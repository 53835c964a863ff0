//! Validate → predict → classify orchestration
//!
//! A [`PredictionSession`] owns the backend, the optional history log and an
//! [`InFlightRegistry`] that allows at most one outstanding prediction per
//! session key. A second submission for a busy key fails immediately instead
//! of queueing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use super::{MatchedPropeller, PredictionBackend, PredictionError, PredictionRequest};
use crate::recommendation::{classify_input, ClassifierInput};
use crate::storage::{HistoryEntry, PredictionHistory};
use crate::types::{
    FormInput, GuidanceResult, MetricDisplay, PerformanceSample, RawFormInput, Recommendation,
};
use crate::validation;

/// Session key used when the caller does not supply one.
pub const DEFAULT_SESSION_KEY: &str = "default";

/// Why a submission produced no report.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The gate was closed; no request was issued.
    #[error("Input rejected: {0}")]
    Rejected(GuidanceResult),
    #[error("A prediction is already in flight for session '{0}'")]
    Busy(String),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

// ============================================================================
// In-flight tracking
// ============================================================================

/// Session keys with a prediction currently outstanding.
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    active: Arc<Mutex<HashSet<String>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`. `None` when it is already claimed.
    pub fn try_acquire(&self, key: &str) -> Option<InFlightGuard> {
        let mut active = self.active.lock().unwrap_or_else(|e| {
            warn!("In-flight registry lock poisoned, recovering");
            e.into_inner()
        });
        if !active.insert(key.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            registry: self.clone(),
            key: key.to_string(),
        })
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .contains(key)
    }
}

/// Releases its session key on drop, including when the future is cancelled.
pub struct InFlightGuard {
    registry: InFlightRegistry,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry
            .active
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .remove(&self.key);
    }
}

// ============================================================================
// Report
// ============================================================================

/// Everything shown after a successful prediction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    /// The request exactly as sent to the prediction service, so its keys
    /// keep the service's snake_case wire names (`advance_ratio`).
    pub request: PredictionRequest,
    pub sample: PerformanceSample,
    pub metrics: MetricDisplay,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<MatchedPropeller>,
    /// Service reported a different drone label than the local rules chose.
    pub backend_label_mismatch: bool,
    pub completed_at: DateTime<Utc>,
}

// ============================================================================
// Session
// ============================================================================

/// Runs submissions against a prediction backend.
#[derive(Clone)]
pub struct PredictionSession {
    backend: Arc<dyn PredictionBackend>,
    history: Option<PredictionHistory>,
    in_flight: InFlightRegistry,
}

impl PredictionSession {
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        Self {
            backend,
            history: None,
            in_flight: InFlightRegistry::new(),
        }
    }

    #[must_use]
    pub fn with_history(mut self, history: PredictionHistory) -> Self {
        self.history = Some(history);
        self
    }

    pub fn endpoint(&self) -> &str {
        self.backend.endpoint()
    }

    pub const fn history(&self) -> Option<&PredictionHistory> {
        self.history.as_ref()
    }

    pub const fn in_flight(&self) -> &InFlightRegistry {
        &self.in_flight
    }

    /// Validate the raw form and, if the gate is open, predict and classify.
    pub async fn submit(
        &self,
        session_key: &str,
        raw: &RawFormInput,
    ) -> Result<PredictionReport, SessionError> {
        let form = FormInput::parse(raw);
        let guidance = validation::validate_form(&form);
        if validation::has_invalid_input(&guidance) {
            return Err(SessionError::Rejected(guidance));
        }
        let Some(request) = form.to_prediction_request() else {
            return Err(SessionError::Rejected(guidance));
        };

        let Some(_guard) = self.in_flight.try_acquire(session_key) else {
            warn!(session = %session_key, "Prediction already in flight, rejecting submission");
            return Err(SessionError::Busy(session_key.to_string()));
        };

        let response = match self.backend.predict(&request).await {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    session = %session_key,
                    endpoint = %self.backend.endpoint(),
                    error = %e,
                    "Prediction failed"
                );
                return Err(e.into());
            }
        };

        let sample = response.sample();
        let recommendation = classify_input(&ClassifierInput::new(
            sample,
            request.pitch,
            request.advance_ratio,
        ));

        let backend_label_mismatch = match response.drone_type.as_deref() {
            Some(label) if label != recommendation.category.service_label() => {
                warn!(
                    service = %label,
                    local = %recommendation.category,
                    "Prediction service drone label disagrees with local rules"
                );
                true
            }
            _ => false,
        };

        let report = PredictionReport {
            request,
            sample,
            metrics: sample.display(),
            recommendation,
            matched: response.matched(),
            backend_label_mismatch,
            completed_at: Utc::now(),
        };

        if let Some(history) = &self.history {
            let entry = HistoryEntry {
                recorded_at: report.completed_at,
                request,
                sample,
                category: recommendation.category,
            };
            if let Err(e) = history.record(&entry) {
                warn!(error = %e, "Failed to store prediction history");
            }
        }

        info!(
            session = %session_key,
            blades = request.blades,
            category = %recommendation.category,
            ct = sample.thrust_coefficient,
            cp = sample.power_coefficient,
            efficiency = sample.efficiency,
            "Prediction complete"
        );

        Ok(report)
    }
}
