//! Advisor Configuration - service endpoints, dashboard embed, storage and datasets as TOML
//!
//! Each struct implements `Default` with the values the service ships with,
//! so running without a config file behaves exactly like the stock setup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use super::defaults;
use crate::datasets::DatasetKind;

/// Environment variable holding an explicit config path.
pub const CONFIG_ENV_VAR: &str = "PROP_ADVISOR_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "prop_advisor.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `AdvisorConfig::load()` which searches:
/// 1. `$PROP_ADVISOR_CONFIG` env var
/// 2. `./prop_advisor.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote prediction service
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Embedded analytics dashboard
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Prediction history log
    #[serde(default)]
    pub storage: StorageConfig,

    /// Reference CSV tables
    #[serde(default)]
    pub datasets: DatasetsConfig,
}

impl AdvisorConfig {
    /// Load configuration using the standard search order:
    /// 1. `$PROP_ADVISOR_CONFIG` environment variable
    /// 2. `./prop_advisor.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// Broken files are logged and skipped rather than aborting startup.
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(
                            path = %p.display(),
                            error = %e,
                            "Failed to load config from {CONFIG_ENV_VAR}, falling back"
                        );
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        // 2. Check ./prop_advisor.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, err) => ConfigError::Parse(path.to_path_buf(), err),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys are logged as warnings and otherwise ignored.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Check every section; all problems are reported together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = super::validation::validate_values(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            Self::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            Self::Serialize(e) => write!(f, "Config serialization error: {e}"),
            Self::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address.
    ///
    /// Can be overridden by `PROP_ADVISOR_SERVER_ADDR` env var or `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

// ============================================================================
// Prediction Service
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Full URL of the POST endpoint
    #[serde(default = "default_prediction_endpoint")]
    pub endpoint: String,

    /// Per-request timeout; there is no retry
    #[serde(default = "default_prediction_timeout")]
    pub timeout_secs: u64,
}

fn default_prediction_endpoint() -> String {
    defaults::PREDICTION_ENDPOINT.to_string()
}
const fn default_prediction_timeout() -> u64 {
    defaults::PREDICTION_TIMEOUT_SECS
}

impl PredictionConfig {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_prediction_endpoint(),
            timeout_secs: default_prediction_timeout(),
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Embed parameters for the third-party analytics view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_url")]
    pub url: String,
    #[serde(default = "default_dashboard_width")]
    pub width: u32,
    #[serde(default = "default_dashboard_height")]
    pub height: u32,
    #[serde(default = "default_dashboard_title")]
    pub title: String,
    #[serde(default = "default_dashboard_docs_url")]
    pub docs_url: String,
    #[serde(default)]
    pub show_viz_home: bool,
    #[serde(default = "default_true")]
    pub embed: bool,
    #[serde(default)]
    pub tabs: bool,
    #[serde(default = "default_true")]
    pub toolbar: bool,
}

fn default_dashboard_url() -> String {
    defaults::DASHBOARD_URL.to_string()
}
const fn default_dashboard_width() -> u32 {
    defaults::DASHBOARD_WIDTH
}
const fn default_dashboard_height() -> u32 {
    defaults::DASHBOARD_HEIGHT
}
fn default_dashboard_title() -> String {
    defaults::DASHBOARD_TITLE.to_string()
}
fn default_dashboard_docs_url() -> String {
    defaults::DASHBOARD_DOCS_URL.to_string()
}
const fn default_true() -> bool {
    true
}

const fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl DashboardConfig {
    /// Iframe source with the display parameters appended.
    ///
    /// The view expects literal `:` prefixed keys, so the query is assembled
    /// by hand instead of going through a form encoder.
    pub fn embed_url(&self) -> String {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{sep}:showVizHome={}&:embed={}&:tabs={}&:toolbar={}",
            self.url,
            yes_no(self.show_viz_home),
            self.embed,
            yes_no(self.tabs),
            yes_no(self.toolbar),
        )
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            url: default_dashboard_url(),
            width: default_dashboard_width(),
            height: default_dashboard_height(),
            title: default_dashboard_title(),
            docs_url: default_dashboard_docs_url(),
            show_viz_home: false,
            embed: true,
            tabs: false,
            toolbar: true,
        }
    }
}

// ============================================================================
// Storage
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Record completed predictions
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Sled directory for the history log
    #[serde(default = "default_history_path")]
    pub history_path: String,
}

fn default_history_path() -> String {
    defaults::HISTORY_PATH.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            history_path: default_history_path(),
        }
    }
}

// ============================================================================
// Reference Datasets
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetsConfig {
    #[serde(default = "default_experiment_path")]
    pub experiment_path: String,

    #[serde(default = "default_geometry_path")]
    pub geometry_path: String,

    /// Rows per response when no limit is given, and the largest limit honoured
    #[serde(default = "default_dataset_max_rows")]
    pub max_rows: usize,
}

fn default_experiment_path() -> String {
    defaults::EXPERIMENT_DATASET_PATH.to_string()
}
fn default_geometry_path() -> String {
    defaults::GEOMETRY_DATASET_PATH.to_string()
}
const fn default_dataset_max_rows() -> usize {
    defaults::DATASET_MAX_ROWS
}

impl DatasetsConfig {
    pub fn path_for(&self, kind: DatasetKind) -> &Path {
        match kind {
            DatasetKind::Experiment => Path::new(&self.experiment_path),
            DatasetKind::Geometry => Path::new(&self.geometry_path),
        }
    }
}

impl Default for DatasetsConfig {
    fn default() -> Self {
        Self {
            experiment_path: default_experiment_path(),
            geometry_path: default_geometry_path(),
            max_rows: default_dataset_max_rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(AdvisorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_embed_url_matches_published_view() {
        let d = DashboardConfig::default();
        assert_eq!(
            d.embed_url(),
            "https://public.tableau.com/views/UAV-Project/Dashboard1?:showVizHome=no&:embed=true&:tabs=no&:toolbar=yes"
        );
    }

    #[test]
    fn test_embed_url_appends_to_existing_query() {
        let d = DashboardConfig {
            url: "https://example.com/view?x=1".to_string(),
            ..DashboardConfig::default()
        };
        assert!(d.embed_url().starts_with("https://example.com/view?x=1&:showVizHome="));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AdvisorConfig::from_toml_str(
            r#"
[prediction]
endpoint = "http://models.internal:9000/predict"
"#,
        )
        .unwrap();
        assert_eq!(config.prediction.endpoint, "http://models.internal:9000/predict");
        assert_eq!(config.prediction.timeout_secs, defaults::PREDICTION_TIMEOUT_SECS);
        assert_eq!(config.server.addr, defaults::SERVER_ADDR);
        assert!(config.storage.enabled);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = AdvisorConfig::from_toml_str(
            r#"
[prediction]
timeout_secs = 0
"#,
        );
        match result {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("timeout_secs")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AdvisorConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AdvisorConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.dashboard.height, config.dashboard.height);
        assert_eq!(parsed.prediction.endpoint, config.prediction.endpoint);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = AdvisorConfig::load_from_file(Path::new("/nonexistent/prop_advisor.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
