//! Load-or-get dictionary cache
//!
//! The first request for an id loads and profiles the dictionary; later
//! requests share the same immutable `Arc<Dictionary>`. Loading happens outside
//! the lock, so two cold requests for one id may both load. Both produce the
//! same dictionary and the first one stored wins.

use super::{Dictionary, DictionaryLoader};
use crate::error::SolverResult;
use rustc_hash::FxHashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Process-lifetime store of loaded dictionaries
pub struct DictionaryCache<L> {
    loader: L,
    entries: RwLock<FxHashMap<String, Arc<Dictionary>>>,
}

impl<L: DictionaryLoader> DictionaryCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            entries: RwLock::new(FxHashMap::default()),
        }
    }

    /// Return the cached dictionary for `id`, loading it on first use
    ///
    /// # Errors
    /// Returns `SolverError::DictionaryNotFound` if the loader cannot provide `id`.
    /// Failures are not cached.
    pub fn get_or_load(&self, id: &str) -> SolverResult<Arc<Dictionary>> {
        if let Some(dict) = self.cached(id) {
            return Ok(dict);
        }

        let entries = self.loader.load(id)?;
        let dict = Arc::new(Dictionary::from_entries(id, entries));
        info!(dictionary = id, words = dict.len(), "loaded dictionary");

        let mut map = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(map.entry(id.to_string()).or_insert(dict)))
    }

    /// The cached dictionary for `id`, without loading
    pub fn cached(&self, id: &str) -> Option<Arc<Dictionary>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Number of dictionaries loaded so far
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SolverError, SolverResult};
    use crate::wordlists::MemoryLoader;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    /// Counts how often the inner loader is hit
    struct CountingLoader {
        inner: MemoryLoader,
        calls: AtomicUsize,
    }

    impl DictionaryLoader for CountingLoader {
        fn load(&self, id: &str) -> SolverResult<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.load(id)
        }
    }

    fn counting() -> CountingLoader {
        CountingLoader {
            inner: MemoryLoader::new().with_dictionary("tiny", ["crane", "slate", "CRANE"]),
            calls: AtomicUsize::new(0),
        }
    }

    #[test]
    fn loads_once_then_shares() {
        let cache = DictionaryCache::new(counting());

        let first = cache.get_or_load("tiny").unwrap();
        let second = cache.get_or_load("tiny").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.loader().calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.len(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_cached() {
        let cache = DictionaryCache::new(counting());

        let err = cache.get_or_load("missing").unwrap_err();
        assert!(matches!(err, SolverError::DictionaryNotFound(_)));
        assert!(cache.is_empty());
        assert!(cache.cached("missing").is_none());
    }

    #[test]
    fn concurrent_cold_loads_agree() {
        let cache = DictionaryCache::new(counting());

        let results: Vec<Arc<Dictionary>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| cache.get_or_load("tiny").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let stored = cache.cached("tiny").unwrap();
        for dict in &results {
            let texts: Vec<&str> = dict.words().iter().map(|w| w.text()).collect();
            assert_eq!(texts, vec!["crane", "slate"]);
        }
        // Whoever loaded, later lookups all see the stored instance
        assert!(Arc::ptr_eq(&stored, &cache.get_or_load("tiny").unwrap()));
        assert_eq!(cache.len(), 1);
    }
}
