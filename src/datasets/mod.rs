//! Reference datasets served to the dashboard
//!
//! The experiment and geometry tables the prediction models were trained on,
//! read from CSV and returned as JSON records. Empty cells and `NaN` become
//! `null`; numeric cells become JSON numbers.

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::path::Path;

/// One CSV row keyed by column header.
pub type DatasetRecord = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Which reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Measured Ct/Cp/efficiency per propeller and advance ratio
    Experiment,
    /// Blade geometry per propeller
    Geometry,
}

impl DatasetKind {
    pub const ALL: [Self; 2] = [Self::Experiment, Self::Geometry];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Experiment => "experiment",
            Self::Geometry => "geometry",
        }
    }

    /// Match a URL segment. Unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert one cell. Integers stay integers so ids and blade counts are not
/// rendered as `3.0`.
fn cell_value(raw: &str) -> Value {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Number(i.into());
    }
    match raw.parse::<f64>().ok().and_then(Number::from_f64) {
        Some(n) => Value::Number(n),
        None => Value::String(raw.to_string()),
    }
}

/// Read at most `limit` rows from a headered CSV file.
pub fn load_records(path: &Path, limit: usize) -> Result<Vec<DatasetRecord>, DatasetError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records().take(limit) {
        let row = row?;
        let record = headers
            .iter()
            .zip(row.iter())
            .map(|(key, value)| (key.clone(), cell_value(value)))
            .collect();
        records.push(record);
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "Dataset loaded");
    Ok(records)
}
