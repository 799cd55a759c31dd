//! Compiled regex cache keyed by raw pattern text.
//!
//! Each [`UrlMatcher`](crate::UrlMatcher) owns one cache. Entries are added
//! by the eager precompile pass at construction and by lazy compilation at
//! evaluation time, and are never evicted: rule sets are small and a new
//! rule set means a new engine with a fresh cache.

use regex::Regex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe regex cache.
///
/// # Thread Safety
/// Lookups take the read lock, so concurrent evaluations of warm patterns
/// never contend. Compilation happens outside any lock; the result is
/// inserted under the write lock with entry semantics, so when two callers
/// race on the same pattern the first insert wins and both get the same
/// `Arc<Regex>`.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Arc<Regex>>>,
    counters: Counters,
}

#[derive(Debug, Default)]
struct Counters {
    lookups: AtomicUsize,
    hits: AtomicUsize,
    misses: AtomicUsize,
    compilations: AtomicUsize,
    failures: AtomicUsize,
}

/// Point-in-time cache statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Total cache lookups
    pub lookups: usize,

    /// Lookups answered from the cache
    pub hits: usize,

    /// Lookups that found nothing
    pub misses: usize,

    /// Successful compilations, eager and lazy
    pub compilations: usize,

    /// Patterns that failed to compile
    pub failures: usize,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.hits as f64 / self.lookups as f64
    }
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a compiled pattern without compiling it.
    pub fn get(&self, pattern: &str) -> Option<Arc<Regex>> {
        self.counters.lookups.fetch_add(1, Ordering::Relaxed);
        let found = self.read().get(pattern).cloned();
        let counter = if found.is_some() {
            &self.counters.hits
        } else {
            &self.counters.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Return the cached regex for `pattern`, compiling and inserting it on
    /// a miss.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Regex>, regex::Error> {
        if let Some(regex) = self.get(pattern) {
            return Ok(regex);
        }
        log::debug!("compiling regex pattern on demand: {pattern}");
        self.compile_and_insert(pattern)
    }

    /// Compile `pattern` into the cache unless it is already present.
    ///
    /// Used by the eager pass at engine construction; it does not count as a
    /// lookup.
    pub fn precompile(&self, pattern: &str) -> Result<(), regex::Error> {
        if self.contains(pattern) {
            return Ok(());
        }
        self.compile_and_insert(pattern).map(|_| ())
    }

    fn compile_and_insert(&self, pattern: &str) -> Result<Arc<Regex>, regex::Error> {
        let compiled = match Regex::new(pattern) {
            Ok(regex) => Arc::new(regex),
            Err(e) => {
                self.counters.failures.fetch_add(1, Ordering::Relaxed);
                return Err(e);
            }
        };
        self.counters.compilations.fetch_add(1, Ordering::Relaxed);

        let mut patterns = self.write();
        let stored = patterns
            .entry(pattern.to_string())
            .or_insert(compiled)
            .clone();
        Ok(stored)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.read().contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            lookups: self.counters.lookups.load(Ordering::Relaxed),
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
            compilations: self.counters.compilations.load(Ordering::Relaxed),
            failures: self.counters.failures.load(Ordering::Relaxed),
        }
    }

    // A panic while holding the lock cannot leave a half-built entry behind
    // (inserts are a single map operation), so poisoned locks are reused.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Regex>>> {
        self.patterns.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Regex>>> {
        self.patterns.write().unwrap_or_else(PoisonError::into_inner)
    }
}
