//! Prediction service integration
//!
//! The aerodynamic coefficients come from an external ML service. This module
//! holds the wire types, the [`PredictionBackend`] seam, the reqwest-based
//! [`HttpPredictionClient`] and the [`PredictionSession`] that strings
//! validation, the remote call and classification together.
//!
//! Calls are single-attempt and fail fast: no retry, no partial results.

mod client;
mod session;

pub use client::HttpPredictionClient;
pub use session::{
    InFlightGuard, InFlightRegistry, PredictionReport, PredictionSession, SessionError,
    DEFAULT_SESSION_KEY,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::PerformanceSample;

/// Prediction service errors
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Prediction service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed prediction response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// JSON body POSTed to the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub blades: u8,
    pub diameter: f64,
    pub pitch: f64,
    pub advance_ratio: f64,
}

/// JSON body returned by the prediction service.
///
/// Only the three coefficients are required. The nearest catalog propeller
/// and the service's own drone label are passed through when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub thrust_coefficient: f64,
    pub power_coefficient: f64,
    pub efficiency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_pitch: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drone_type: Option<String>,
}

impl PredictionResponse {
    pub const fn sample(&self) -> PerformanceSample {
        PerformanceSample {
            thrust_coefficient: self.thrust_coefficient,
            power_coefficient: self.power_coefficient,
            efficiency: self.efficiency,
        }
    }

    /// Nearest catalog propeller, when the service reported one.
    pub fn matched(&self) -> Option<MatchedPropeller> {
        Some(MatchedPropeller {
            brand: self.matched_brand.clone()?,
            diameter: self.matched_diameter,
            pitch: self.matched_pitch,
        })
    }
}

/// Catalog propeller the service matched the request against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPropeller {
    pub brand: String,
    pub diameter: Option<f64>,
    pub pitch: Option<f64>,
}

/// Source of performance predictions.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    /// Issue one prediction request.
    async fn predict(&self, request: &PredictionRequest)
        -> Result<PredictionResponse, PredictionError>;

    /// Where requests go, for logs and health output.
    fn endpoint(&self) -> &str;
}
