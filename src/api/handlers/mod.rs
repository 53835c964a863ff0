//! API route handlers
//!
//! Request handling logic for all API endpoints including:
//! - Service health
//! - Form validation, classification and the full prediction flow
//! - Dashboard embed descriptor, prediction history and reference datasets

mod assessment;
mod dashboard;
mod datasets;
mod history;
mod system;

pub use assessment::*;
pub use dashboard::*;
pub use datasets::*;
pub use history::*;
pub use system::*;

use std::time::Instant;

use crate::config::DatasetsConfig;
use crate::prediction::PredictionSession;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers
#[derive(Clone)]
pub struct AdvisorState {
    /// Validation → prediction → classification pipeline
    pub session: PredictionSession,
    /// Process start, for uptime reporting
    pub started_at: Instant,
    /// Reference CSV locations and row cap
    pub datasets: DatasetsConfig,
}

impl AdvisorState {
    pub fn new(session: PredictionSession) -> Self {
        Self {
            session,
            started_at: Instant::now(),
            datasets: DatasetsConfig::default(),
        }
    }

    pub fn with_datasets(mut self, datasets: DatasetsConfig) -> Self {
        self.datasets = datasets;
        self
    }
}
