//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Server
// ============================================================================

/// HTTP server bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";

// ============================================================================
// Prediction Service
// ============================================================================

/// Prediction endpoint of the locally hosted model service.
pub const PREDICTION_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// HTTP client timeout for a single prediction request (seconds).
pub const PREDICTION_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Embedded Dashboard
// ============================================================================

/// Published analytics view embedded on the dashboard page.
pub const DASHBOARD_URL: &str = "https://public.tableau.com/views/UAV-Project/Dashboard1";

/// Fixed iframe width (px).
pub const DASHBOARD_WIDTH: u32 = 1200;

/// Fixed iframe height (px). The view does not scroll inside the frame.
pub const DASHBOARD_HEIGHT: u32 = 2750;

pub const DASHBOARD_TITLE: &str = "UAV Propeller Performance Dashboard";

/// Methodology write-up linked under the dashboard.
pub const DASHBOARD_DOCS_URL: &str =
    "https://www.notion.so/Dashboard-Detailed-Overview-2fed12fcb09480b3b973ce4326669acf";

// ============================================================================
// Prediction History
// ============================================================================

/// Sled directory for the prediction history log.
pub const HISTORY_PATH: &str = "./data/prediction_history.db";

/// Entries returned by the history endpoint when no limit is given.
pub const HISTORY_DEFAULT_LIMIT: usize = 20;

/// Upper bound on a single history query.
pub const HISTORY_MAX_LIMIT: usize = 500;

// ============================================================================
// Reference Datasets
// ============================================================================

/// Measured performance table served to the dashboard.
pub const EXPERIMENT_DATASET_PATH: &str = "./Data/experiment_brand_diverse.csv";

/// Propeller geometry table served to the dashboard.
pub const GEOMETRY_DATASET_PATH: &str = "./Data/geometry_brand_diverse.csv";

/// Rows returned per dataset request, and the cap on `?limit=`.
pub const DATASET_MAX_ROWS: usize = 250;
