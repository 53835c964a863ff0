//! Config Validation Tests
//!
//! Typo detection and value validation for `prop_advisor.toml`, exercised
//! independently from the server.

use prop_advisor::config::validation::{
    known_config_keys, suggest_correction, validate_unknown_keys, validate_values,
};
use prop_advisor::config::{AdvisorConfig, ConfigError};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_prediction_endpoint_warns_with_suggestion() {
    let toml_str = r#"
[prediction]
endpont = "http://127.0.0.1:5000/predict"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("endpont"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("prediction.endpoint")
    );
}

#[test]
fn typo_in_dashboard_section_warns() {
    let toml_str = r#"
[dashboard]
widht = 1200
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("dashboard.width"));
}

#[test]
fn unrelated_key_has_no_suggestion() {
    let toml_str = r#"
[storage]
completely_unrelated_setting = true
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].suggestion.is_none());
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[server]
addr = "127.0.0.1:8080"

[prediction]
endpoint = "http://127.0.0.1:5000/predict"
timeout_secs = 10

[dashboard]
width = 1000
height = 2000
toolbar = false

[storage]
enabled = false
history_path = "./data/history.db"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(warnings.is_empty(), "Unexpected warnings: {warnings:?}");
}

#[test]
fn default_config_round_trips_without_unknown_keys() {
    let toml_str = AdvisorConfig::default().to_toml().unwrap();
    let warnings = validate_unknown_keys(&toml_str);
    assert!(
        warnings.is_empty(),
        "Serialized defaults contain keys missing from known_config_keys: {warnings:?}"
    );
}

#[test]
fn suggest_correction_picks_nearest_key() {
    let known = known_config_keys();
    assert_eq!(
        suggest_correction("storage.histroy_path", &known).as_deref(),
        Some("storage.history_path")
    );
}

// ============================================================================
// Value Validation
// ============================================================================

#[test]
fn default_config_is_valid() {
    assert!(validate_values(&AdvisorConfig::default()).is_empty());
}

#[test]
fn zero_timeout_is_rejected() {
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
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn non_http_endpoint_is_rejected() {
    let result = AdvisorConfig::from_toml_str(
        r#"
[prediction]
endpoint = "ftp://models.local/predict"
"#,
    );
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn multiple_problems_are_reported_together() {
    let mut cfg = AdvisorConfig::default();
    cfg.prediction.timeout_secs = 0;
    cfg.dashboard.width = 0;
    cfg.server.addr = String::new();
    let errors = validate_values(&cfg);
    assert!(errors.len() >= 3, "Expected 3+ errors, got {errors:?}");
}

#[test]
fn partial_config_fills_defaults() {
    let cfg = AdvisorConfig::from_toml_str(
        r#"
[prediction]
endpoint = "http://10.0.0.5:5000/predict"
"#,
    )
    .unwrap();
    assert_eq!(cfg.prediction.endpoint, "http://10.0.0.5:5000/predict");
    assert_eq!(cfg.prediction.timeout_secs, 30);
    assert_eq!(cfg.dashboard.width, 1200);
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = AdvisorConfig::load_from_file(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_, _))));
}

#[test]
fn load_from_file_reads_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prop_advisor.toml");
    std::fs::write(
        &path,
        r#"
[server]
addr = "0.0.0.0:9090"
"#,
    )
    .unwrap();
    let cfg = AdvisorConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.server.addr, "0.0.0.0:9090");
}

#[test]
fn datasets_section_is_known_and_validated() {
    let toml_str = r#"
[datasets]
experiment_path = "./Data/experiment.csv"
max_rows = 0
"#;
    assert!(validate_unknown_keys(toml_str).is_empty());
    match AdvisorConfig::from_toml_str(toml_str) {
        Err(ConfigError::Validation(errors)) => {
            assert!(errors.iter().any(|e| e.contains("datasets.max_rows")));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}
