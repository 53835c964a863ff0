//! Prediction history storage
//!
//! Persists every completed prediction to Sled DB. Keys are UTC nanosecond
//! timestamps in big-endian bytes so iteration order is chronological.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::prediction::PredictionRequest;
use crate::types::{DroneCategory, PerformanceSample};

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One stored prediction: inputs, coefficients and the chosen category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recorded_at: DateTime<Utc>,
    pub request: PredictionRequest,
    pub sample: PerformanceSample,
    pub category: DroneCategory,
}

/// Prediction history backed by a Sled tree.
#[derive(Clone)]
pub struct PredictionHistory {
    db: Arc<sled::Db>,
}

impl PredictionHistory {
    /// Open or create the history database at the specified path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path_ref = path.as_ref();
        let db = sled::open(path_ref)?;
        tracing::info!(path = %path_ref.display(), entries = db.len(), "Prediction history opened");
        Ok(Self { db: Arc::new(db) })
    }

    /// Store an entry.
    ///
    /// Two entries in the same nanosecond would collide, so the key is bumped
    /// forward until a free slot is found.
    pub fn record(&self, entry: &HistoryEntry) -> Result<(), StorageError> {
        let value = serde_json::to_vec(entry)?;
        let mut ts = entry
            .recorded_at
            .timestamp_nanos_opt()
            .unwrap_or_else(|| entry.recorded_at.timestamp() * 1_000_000_000);

        loop {
            let key = ts.to_be_bytes();
            match self
                .db
                .compare_and_swap(key, None as Option<&[u8]>, Some(value.as_slice()))?
            {
                Ok(()) => break,
                Err(_) => ts += 1,
            }
        }

        tracing::debug!(
            category = %entry.category,
            blades = entry.request.blades,
            "Stored prediction history entry"
        );
        Ok(())
    }

    /// Most recent `limit` entries, newest first. Undecodable rows are skipped.
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        self.db
            .iter()
            .rev()
            .filter_map(Result::ok)
            .filter_map(|(_, value)| serde_json::from_slice::<HistoryEntry>(&value).ok())
            .take(limit)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.db.len()
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }

    /// Remove every entry.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.db.clear()?;
        self.db.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(at: DateTime<Utc>, category: DroneCategory) -> HistoryEntry {
        HistoryEntry {
            recorded_at: at,
            request: PredictionRequest {
                blades: 2,
                diameter: 10.0,
                pitch: 5.0,
                advance_ratio: 0.4,
            },
            sample: PerformanceSample {
                thrust_coefficient: 0.09,
                power_coefficient: 0.03,
                efficiency: 0.5,
            },
            category,
        }
    }

    #[test]
    fn test_recent_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let history = PredictionHistory::open(dir.path().join("history.db")).unwrap();
        let base = Utc::now();

        history.record(&entry(base, DroneCategory::Mapping)).unwrap();
        history
            .record(&entry(base + Duration::seconds(1), DroneCategory::Racing))
            .unwrap();
        history
            .record(&entry(base + Duration::seconds(2), DroneCategory::Delivery))
            .unwrap();

        let recent = history.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].category, DroneCategory::Delivery);
        assert_eq!(recent[1].category, DroneCategory::Racing);
        assert_eq!(history.count(), 3);
    }

    #[test]
    fn test_same_timestamp_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let history = PredictionHistory::open(dir.path().join("history.db")).unwrap();
        let at = Utc::now();

        history.record(&entry(at, DroneCategory::Mapping)).unwrap();
        history.record(&entry(at, DroneCategory::Surveillance)).unwrap();

        assert_eq!(history.count(), 2);
    }

    #[test]
    fn test_clear() {
        let dir = tempfile::tempdir().unwrap();
        let history = PredictionHistory::open(dir.path().join("history.db")).unwrap();
        history
            .record(&entry(Utc::now(), DroneCategory::GeneralPurpose))
            .unwrap();
        history.clear().unwrap();
        assert_eq!(history.count(), 0);
        assert!(history.recent(10).is_empty());
    }
}
