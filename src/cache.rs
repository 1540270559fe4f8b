//! Process-wide book cache with single-flight loading.
//!
//! The cache is an explicit object constructed once and handed to
//! consumers, not an ambient global. On a miss it drives the full
//! extract → normalize → segment → metrics pipeline and stores an immutable
//! [`BookRecord`]; concurrent first accesses for one id are collapsed into a
//! single load via a per-key gate, so a multi-megabyte document is parsed
//! at most once. Loader errors propagate and are never cached.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::{debug, info};

use crate::document::{BookRecord, CanonicalText, RawDocument};
use crate::error::BookResult;
use crate::extract::extractor_for;
use crate::titles::TitleResolver;
use crate::{metrics, normalize, segment};

/// Words per minute assumed for silent reading.
pub const READING_WPM: usize = 200;

/// Word budget for display/navigation sections.
pub const DISPLAY_BUDGET: usize = 500;

/// Capability that resolves a book id to raw document bytes.
///
/// Supplied by the caller; the cache does not know whether the bytes come
/// from a directory, an object store, or a test fixture.
pub trait BookLoader: Sync {
    fn load(&self, id: &str) -> BookResult<RawDocument>;
}

/// Keyed store of canonical per-book records, populated lazily.
///
/// Records are immutable once stored and are never evicted automatically;
/// [`BookCache::invalidate`] drops one so the next access rebuilds it.
pub struct BookCache {
    records: DashMap<String, Arc<BookRecord>>,
    /// Per-key gates serializing the miss path.
    inflight: DashMap<String, Arc<Mutex<()>>>,
    titles: TitleResolver,
    display_budget: usize,
}

impl BookCache {
    /// Create an empty cache using the default display budget.
    pub fn new(titles: TitleResolver) -> Self {
        Self::with_display_budget(titles, DISPLAY_BUDGET)
    }

    /// Create an empty cache with an explicit display section budget.
    pub fn with_display_budget(titles: TitleResolver, display_budget: usize) -> Self {
        Self {
            records: DashMap::new(),
            inflight: DashMap::new(),
            titles,
            display_budget,
        }
    }

    /// Return the cached record for `id`, loading it through `loader` on a
    /// miss.
    ///
    /// A hit returns the stored record unchanged, with no revalidation
    /// against the underlying source. On a concurrent miss, exactly one
    /// caller invokes the loader; the others wait on the per-key gate and
    /// then observe the stored record.
    pub fn get_or_load(&self, id: &str, loader: &dyn BookLoader) -> BookResult<Arc<BookRecord>> {
        if let Some(record) = self.records.get(id) {
            debug!(book = id, "cache hit");
            return Ok(record.value().clone());
        }

        let gate = self
            .inflight
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        let _guard = gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        // Another caller may have completed the load while we waited.
        if let Some(record) = self.records.get(id) {
            debug!(book = id, "cache hit after wait");
            return Ok(record.value().clone());
        }

        // Insert before dropping the gate so a caller that grabs a fresh
        // gate after removal still observes the record.
        match self.build_record(id, loader) {
            Ok(record) => {
                let record = Arc::new(record);
                self.records.insert(id.to_string(), record.clone());
                self.inflight.remove(id);
                Ok(record)
            }
            Err(e) => {
                self.inflight.remove(id);
                Err(e)
            }
        }
    }

    /// Drop the cached record for `id` so the next access rebuilds it.
    pub fn invalidate(&self, id: &str) {
        self.records.remove(id);
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run the full pipeline for one book.
    fn build_record(&self, id: &str, loader: &dyn BookLoader) -> BookResult<BookRecord> {
        let raw = loader.load(id)?;
        let extracted = extractor_for(raw.format).extract(&raw.data)?;

        let display = normalize::clean_paragraphs(&extracted);
        let folded = normalize::fold(&normalize::clean(&extracted));
        let sections = segment::segment(&display, self.display_budget)?;
        let word_count = metrics::word_count(&display);
        let reading_minutes = metrics::estimate_minutes(word_count, READING_WPM);

        let cached_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        info!(
            book = id,
            format = %raw.format,
            words = word_count,
            sections = sections.len(),
            "book loaded"
        );

        Ok(BookRecord {
            id: id.to_string(),
            title: self.titles.resolve(id),
            text: CanonicalText { display, folded },
            sections,
            word_count,
            reading_minutes,
            cached_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;
    use crate::error::BookError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Loader serving one fixed HTML document, counting invocations.
    struct CountingLoader {
        calls: AtomicUsize,
    }

    impl CountingLoader {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl BookLoader for CountingLoader {
        fn load(&self, _id: &str) -> BookResult<RawDocument> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawDocument {
                data: b"<body><p>Um conto.</p><p>Sobre a \xc3\x81rvore.</p></body>".to_vec(),
                format: DocumentFormat::Html,
            })
        }
    }

    /// Loader that always reports the book as missing.
    struct MissingLoader;

    impl BookLoader for MissingLoader {
        fn load(&self, id: &str) -> BookResult<RawDocument> {
            Err(BookError::NotFound { id: id.into() })
        }
    }

    fn cache() -> BookCache {
        BookCache::new(TitleResolver::default())
    }

    #[test]
    fn miss_builds_full_record() {
        let cache = cache();
        let loader = CountingLoader::new();
        let record = cache.get_or_load("Um_Conto", &loader).unwrap();

        assert_eq!(record.id, "Um_Conto");
        assert_eq!(record.title, "Um Conto");
        assert_eq!(record.text.display, "Um conto.\n\nSobre a Árvore.");
        assert_eq!(record.text.folded, "um conto. sobre a arvore.");
        assert_eq!(record.word_count, 5);
        assert_eq!(record.reading_minutes, 1);
        assert_eq!(record.sections.len(), 1);
    }

    #[test]
    fn hit_returns_same_record_without_reload() {
        let cache = cache();
        let loader = CountingLoader::new();
        let first = cache.get_or_load("book", &loader).unwrap();
        let second = cache.get_or_load("book", &loader).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        let cache = cache();
        let loader = CountingLoader::new();

        std::thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    cache.get_or_load("shared", &loader).unwrap();
                });
            }
        });

        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn not_found_propagates_and_is_not_cached() {
        let cache = cache();

        let err = cache.get_or_load("ghost", &MissingLoader).unwrap_err();
        assert!(matches!(err, BookError::NotFound { .. }));
        assert!(cache.is_empty());

        // The same id succeeds once the underlying source appears.
        let loader = CountingLoader::new();
        let record = cache.get_or_load("ghost", &loader).unwrap();
        assert_eq!(record.id, "ghost");
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let cache = cache();
        let loader = CountingLoader::new();

        let first = cache.get_or_load("book", &loader).unwrap();
        cache.invalidate("book");
        let second = cache.get_or_load("book", &loader).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }
}
