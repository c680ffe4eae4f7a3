//! Dataset source interfaces.
//!
//! Ownership model:
//! - `DatasetSource` is the loader-facing interface that produces a whole `Dataset`.
//! - `CsvSource` reads the tweet CSV from disk and validates its schema.
//! - `InMemorySource` wraps prebuilt records (tests, embedding callers).

use crate::data::{Dataset, TweetRecord};
use crate::errors::ViewError;

/// CSV-backed source implementation.
pub mod csv_source;
/// Timestamp and coordinate parsing helpers.
pub mod parsing;

pub use csv_source::{CsvSource, CsvSourceConfig};

/// Loader-facing dataset source.
///
/// A load either yields every row or fails; partial datasets are never returned.
pub trait DatasetSource: Send + Sync {
    /// Human-readable identifier used in logs (usually the file path).
    fn describe(&self) -> String;
    /// Read and validate the full dataset.
    fn load(&self) -> Result<Dataset, ViewError>;
}

/// Source over records that are already in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    records: Vec<TweetRecord>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(records: Vec<TweetRecord>) -> Self {
        Self { records }
    }
}

impl DatasetSource for InMemorySource {
    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }

    fn load(&self) -> Result<Dataset, ViewError> {
        Ok(Dataset::new(self.records.clone()))
    }
}
