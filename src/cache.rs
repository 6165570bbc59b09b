//! Step classification caching.
//!
//! This module provides [`StepCache`] — an LRU cache that avoids re-running
//! the pattern table on paths seen before. It is gated behind the `cache`
//! feature flag and uses the [`lru`] crate internally.
//!
//! Negative results are cached too: a path that classifies to no step at all
//! is remembered as `None`, since "outside the wizard" is the most expensive
//! answer to recompute (every pattern must fail to match).
//!
//! [`CacheStats`] tracks hits, misses, and invalidations so you can monitor
//! cache effectiveness at runtime.
//!
//! # Examples
//!
//! ```
//! use wizard_guard::cache::StepCache;
//! use wizard_guard::{FlowConfig, WizardStep};
//!
//! let flow = FlowConfig::individual();
//! let mut cache = StepCache::new();
//!
//! let step = cache.classify(flow.patterns(), "/offre/AB12/individuel/creation");
//! assert_eq!(step, Some(WizardStep::Offer));
//! assert_eq!(cache.stats().misses, 1);
//!
//! let step = cache.classify(flow.patterns(), "/offre/AB12/individuel/creation");
//! assert_eq!(step, Some(WizardStep::Offer));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use lru::LruCache;
use std::num::NonZeroUsize;

use crate::patterns::PatternTable;
use crate::step::WizardStep;
use crate::{debug_log, trace_log};

/// Counters tracking cache hit/miss rates and invalidations.
///
/// Use [`hit_rate`](Self::hit_rate) for quick ratio access.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: usize,
    /// Number of lookups that fell through to the pattern table.
    pub misses: usize,
    /// Number of full invalidations (via [`StepCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache for step classification results.
///
/// Keys are paths as given by the caller; values are the classification
/// outcome, including `None` for paths outside the wizard. Default capacity
/// is 256 entries.
///
/// The cache must be cleared whenever the pattern table it serves changes;
/// cached results are only valid for the table that produced them.
#[derive(Debug)]
pub struct StepCache {
    entries: LruCache<String, Option<WizardStep>>,
    stats: CacheStats,
}

impl StepCache {
    const DEFAULT_CAPACITY: usize = 256;

    /// Create a cache with the default capacity (256 entries).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).expect("Cache capacity must be non-zero");
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Classify a path through the cache.
    ///
    /// Answers from the cache when possible; otherwise runs
    /// [`PatternTable::classify`] and remembers the result. Because the
    /// classifier is pure, cached and uncached answers always agree.
    pub fn classify(&mut self, table: &PatternTable, path: &str) -> Option<WizardStep> {
        if let Some(cached) = self.get(path) {
            return cached;
        }
        let step = table.classify(path);
        self.insert(path.to_string(), step);
        step
    }

    /// Look up a previously classified path.
    ///
    /// The outer `Option` distinguishes a cache miss from a cached
    /// "outside the wizard" result: `Some(None)` means the path was seen
    /// before and matched nothing. Updates hit/miss stats.
    pub fn get(&mut self, path: &str) -> Option<Option<WizardStep>> {
        if let Some(step) = self.entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Step cache hit for '{}'", path);
            Some(*step)
        } else {
            self.stats.misses += 1;
            trace_log!("Step cache miss for '{}'", path);
            None
        }
    }

    /// Insert a classification result.
    pub fn insert(&mut self, path: String, step: Option<WizardStep>) {
        trace_log!("Caching step {:?} for '{}'", step, path);
        self.entries.push(path, step);
    }

    /// Drop every entry and increment the invalidation counter.
    pub fn clear(&mut self) {
        let len = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Step cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Return the number of entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for StepCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StepCache {
    /// Cloning yields a cold cache with the same capacity and a copy of the
    /// stats.
    fn clone(&self) -> Self {
        Self {
            entries: LruCache::new(self.entries.cap()),
            stats: self.stats.clone(),
        }
    }
}
