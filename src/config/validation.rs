//! Config validation: unknown-key detection with Levenshtein suggestions
//! and value checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use super::AdvisorConfig;

/// A non-fatal config warning (typo, unused key).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `AdvisorConfig`.
///
/// Any new field added to `AdvisorConfig` must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [server]
        "server",
        "server.addr",
        // [prediction]
        "prediction",
        "prediction.endpoint",
        "prediction.timeout_secs",
        // [dashboard]
        "dashboard",
        "dashboard.url",
        "dashboard.width",
        "dashboard.height",
        "dashboard.title",
        "dashboard.docs_url",
        "dashboard.show_viz_home",
        "dashboard.embed",
        "dashboard.tabs",
        "dashboard.toolbar",
        // [storage]
        "storage",
        "storage.enabled",
        "storage.history_path",
        // [datasets]
        "datasets",
        "datasets.experiment_path",
        "datasets.geometry_path",
        "datasets.max_rows",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest known key within edit distance 3, if any.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|k| (*k, levenshtein(unknown, k)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by(|(ka, da), (kb, db)| da.cmp(db).then_with(|| ka.cmp(kb)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// Parse errors yield no warnings; serde reports them afterwards.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Value Validation
// ============================================================================

fn check_http_url(value: &str, name: &str, errors: &mut Vec<String>) {
    match reqwest::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(format!(
            "{name} = '{value}' must use http or https (got '{}')",
            url.scheme()
        )),
        Err(e) => errors.push(format!("{name} = '{value}' is not a valid URL: {e}")),
    }
}

/// Hard errors for a parsed config. Empty when the config is usable.
pub fn validate_values(config: &AdvisorConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if config.server.addr.trim().is_empty() {
        errors.push("server.addr must not be empty".to_string());
    }

    check_http_url(&config.prediction.endpoint, "prediction.endpoint", &mut errors);
    if config.prediction.timeout_secs == 0 {
        errors.push("prediction.timeout_secs must be > 0".to_string());
    }

    let d = &config.dashboard;
    check_http_url(&d.url, "dashboard.url", &mut errors);
    if d.width == 0 || d.height == 0 {
        errors.push(format!(
            "dashboard.width and dashboard.height must be > 0 (got {}x{})",
            d.width, d.height
        ));
    }

    if config.storage.enabled && config.storage.history_path.trim().is_empty() {
        errors.push("storage.history_path must be set when storage.enabled = true".to_string());
    }

    let ds = &config.datasets;
    if ds.max_rows == 0 {
        errors.push("datasets.max_rows must be > 0".to_string());
    }
    for (name, path) in [
        ("datasets.experiment_path", &ds.experiment_path),
        ("datasets.geometry_path", &ds.geometry_path),
    ] {
        if path.trim().is_empty() {
            errors.push(format!("{name} must not be empty"));
        }
    }

    errors
}

// ============================================================================
// Tests
// ============================================================================
