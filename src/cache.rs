//! Memoization of compiled namespaces.
//!
//! Entries are keyed by namespace name, the definition's canonical hash and
//! the options fingerprint, so an unchanged definition is compiled once per
//! build no matter how many times (or from how many threads) it is requested.

use bakecss::{CompileOptions, CompiledStyles, NamespaceError, StyleDefinition};
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Identity of one compilation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub namespace: String,
    pub definition: u64,
    pub options: u64,
}

impl CacheKey {
    pub fn new(namespace: &str, definition: &StyleDefinition, options: &CompileOptions) -> Self {
        Self {
            namespace: namespace.to_string(),
            definition: definition.canonical_hash(),
            options: options.fingerprint(),
        }
    }
}

/// Thread-safe cache of compiled namespaces.
#[derive(Debug, Default)]
pub struct CompileCache {
    entries: DashMap<CacheKey, Arc<CompiledStyles>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CompileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<CompiledStyles>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns the cached output for `key`, compiling it on a miss.
    ///
    /// Compilation runs outside any lock; if two threads miss on the same key
    /// concurrently, both compile and the first insert wins. Failed
    /// compilations are not cached.
    pub fn get_or_compile(
        &self,
        key: CacheKey,
        compile: impl FnOnce() -> Result<CompiledStyles, NamespaceError>,
    ) -> Result<Arc<CompiledStyles>, NamespaceError> {
        if let Some(hit) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            log::debug!("cache hit for namespace `{}`", key.namespace);
            return Ok(hit);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::debug!("cache miss for namespace `{}`", key.namespace);
        let compiled = Arc::new(compile()?);
        Ok(Arc::clone(self.entries.entry(key).or_insert(compiled).value()))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
