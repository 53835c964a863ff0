//! Prop Advisor: UAV propeller assessment
//!
//! Validates propeller form input, obtains aerodynamic coefficients from an
//! external prediction service and recommends a drone type with an ordered
//! rule table.
//!
//! ## Architecture
//!
//! - **Validation**: per-blade-class range checks that gate prediction requests
//! - **Recommendation**: first-match-wins drone-type rules over the coefficients,
//!   pitch and advance ratio
//! - **Prediction**: reqwest client for the model service and the session that ties
//!   the steps together
//! - **Datasets**: reference CSV tables served as JSON records
//! - **API**: axum JSON endpoints consumed by the rendering surface

pub mod api;
pub mod config;
pub mod datasets;
pub mod prediction;
pub mod recommendation;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export configuration
pub use config::AdvisorConfig;

// Re-export commonly used types
pub use types::{
    BladeClass, BladeCount, DroneCategory, FormInput, GuidanceResult, MeasurementField,
    ParsedMeasurement, PerformanceSample, RawFormInput, Recommendation, VisualTheme,
};

// Re-export the two pure decision functions
pub use recommendation::classify;
pub use validation::{has_invalid_input, validate};

// Re-export prediction plumbing
pub use prediction::{
    HttpPredictionClient, PredictionBackend, PredictionError, PredictionReport, PredictionSession,
    SessionError,
};

// Re-export storage
pub use storage::{HistoryEntry, PredictionHistory, StorageError};
