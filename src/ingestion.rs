use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, info};

use crate::data::Dataset;
use crate::errors::ViewError;
use crate::source::{CsvSource, DatasetSource};

/// Memoized, single-initialization dataset loader.
///
/// The first `get_or_load` reads the source while holding the guard, so
/// concurrent callers block and then receive the same `Arc<Dataset>`; the
/// source is never read twice. Failed loads are not cached.
pub struct DatasetCache {
    source: Box<dyn DatasetSource>,
    slot: Mutex<Option<Arc<Dataset>>>,
    loads: AtomicUsize,
}

impl DatasetCache {
    /// Create a cache over `source`. Nothing is read until first access.
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            slot: Mutex::new(None),
            loads: AtomicUsize::new(0),
        }
    }

    /// Process-wide cache reading the default `Tweets.csv` path.
    pub fn global() -> &'static DatasetCache {
        static GLOBAL: OnceLock<DatasetCache> = OnceLock::new();
        GLOBAL.get_or_init(|| DatasetCache::new(CsvSource::new(Default::default())))
    }

    /// Return the cached dataset, loading it on first use.
    pub fn get_or_load(&self) -> Result<Arc<Dataset>, ViewError> {
        let mut guard = self.slot();
        if let Some(dataset) = guard.as_ref() {
            debug!(source = %self.source.describe(), "dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(self.source.load()?);
        let loads = self.loads.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            source = %self.source.describe(),
            records = dataset.len(),
            loads,
            "dataset cached"
        );
        *guard = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// True once a dataset has been loaded and not reset.
    pub fn is_loaded(&self) -> bool {
        self.slot().is_some()
    }

    /// Number of successful source reads so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Drop the cached dataset so the next access reads the source again.
    ///
    /// Intended for test isolation.
    pub fn reset(&self) {
        *self.slot() = None;
    }

    // The slot is only written after a successful load, so a guard left
    // poisoned by a panicking source still holds a consistent value.
    fn slot(&self) -> MutexGuard<'_, Option<Arc<Dataset>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Load the default dataset through the process-wide cache.
pub fn load_cached() -> Result<Arc<Dataset>, ViewError> {
    DatasetCache::global().get_or_load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Sentiment, TweetRecord};
    use crate::source::InMemorySource;
    use chrono::DateTime;
    use std::thread;

    struct FailingSource;

    impl DatasetSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn load(&self) -> Result<Dataset, ViewError> {
            Err(ViewError::load("failing", "simulated failure"))
        }
    }

    struct PanicOnceSource {
        panicked: std::sync::atomic::AtomicBool,
        inner: InMemorySource,
    }

    impl DatasetSource for PanicOnceSource {
        fn describe(&self) -> String {
            "panic-once".to_string()
        }

        fn load(&self) -> Result<Dataset, ViewError> {
            if !self.panicked.swap(true, Ordering::SeqCst) {
                panic!("source blew up mid-read");
            }
            self.inner.load()
        }
    }

    fn record(id: &str) -> TweetRecord {
        TweetRecord {
            id: id.to_string(),
            text: format!("tweet {id}"),
            sentiment: Sentiment::Neutral,
            negative_reason: None,
            airline: "Delta".to_string(),
            created_at: DateTime::parse_from_rfc3339("2015-02-24T10:00:00-08:00").unwrap(),
            coordinates: None,
        }
    }

    #[test]
    fn repeated_access_reads_source_once() {
        let cache = DatasetCache::new(InMemorySource::new(vec![record("1"), record("2")]));
        assert!(!cache.is_loaded());
        let first = cache.get_or_load().unwrap();
        let second = cache.get_or_load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.load_count(), 1);
        assert!(cache.is_loaded());
    }

    #[test]
    fn reset_forces_a_fresh_read_with_equal_contents() {
        let cache = DatasetCache::new(InMemorySource::new(vec![record("1")]));
        let first = cache.get_or_load().unwrap();
        cache.reset();
        assert!(!cache.is_loaded());
        let second = cache.get_or_load().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(cache.load_count(), 2);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let cache = DatasetCache::new(FailingSource);
        assert!(cache.get_or_load().is_err());
        assert!(cache.get_or_load().is_err());
        assert_eq!(cache.load_count(), 0);
        assert!(!cache.is_loaded());
    }

    #[test]
    fn cache_recovers_after_a_panicking_load() {
        let cache = Arc::new(DatasetCache::new(PanicOnceSource {
            panicked: std::sync::atomic::AtomicBool::new(false),
            inner: InMemorySource::new(vec![record("1")]),
        }));
        let worker = Arc::clone(&cache);
        assert!(thread::spawn(move || worker.get_or_load()).join().is_err());
        assert!(cache.slot.is_poisoned());
        assert!(!cache.is_loaded());

        cache.reset();
        let dataset = cache.get_or_load().unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(cache.is_loaded());
        assert_eq!(cache.load_count(), 1);
    }

    #[test]
    fn global_cache_reports_missing_default_file() {
        use crate::constants::loader::DEFAULT_DATASET_PATH;
        if std::path::Path::new(DEFAULT_DATASET_PATH).exists() {
            return;
        }
        let err = load_cached().unwrap_err();
        assert!(matches!(err, ViewError::Load { .. }));
        assert!(!DatasetCache::global().is_loaded());
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        let cache = Arc::new(DatasetCache::new(InMemorySource::new(vec![record("1")])));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_load().unwrap())
            })
            .collect();
        let datasets: Vec<Arc<Dataset>> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        assert_eq!(cache.load_count(), 1);
        assert!(datasets.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
