//! Persistent storage
//!
//! Sled-backed log of completed predictions, the local counterpart of the
//! prediction service's own logging table.

pub mod history;

pub use history::{HistoryEntry, PredictionHistory, StorageError};
