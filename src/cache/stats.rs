//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use std::time::Duration;

use serde::Serialize;

// == Cache Stats ==
/// Monotonic performance counters for one cache instance.
///
/// Counters only reset on an explicit `cache_clear()`; the store
/// draining to empty (all entries expired or evicted) leaves them
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of calls served from the cache
    pub hits: u64,
    /// Number of calls that had to invoke the producer
    pub misses: u64,
    /// Number of entries evicted due to the capacity bound
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    /// Returns all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// == Cache Info ==
/// Read-only snapshot of a cache's state and counters.
///
/// Produced on demand; `current_size` and `remaining_ttl` are computed
/// after the lazy expiration sweep, so expired entries never show up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    /// Number of calls served from the cache
    pub hits: u64,
    /// Number of calls that invoked the producer
    pub misses: u64,
    /// Number of entries evicted due to the capacity bound
    pub evictions: u64,
    /// Configured capacity bound, if any
    pub max_size: Option<usize>,
    /// Number of live (unexpired) entries
    pub current_size: usize,
    /// Time until the soonest-to-expire live entry lapses; zero when empty
    pub remaining_ttl: Duration,
}

impl CacheInfo {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no calls have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
