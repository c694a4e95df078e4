//! Cache Engine Module
//!
//! Orchestrates key encoding, entry storage, expiration, eviction and
//! statistics for the call facades. The engine itself never invokes the
//! producer; facades probe, run the producer on a miss, then admit the
//! result. Keeping the miss accounting inside `probe` means a failed or
//! cancelled producer still counts the attempt while caching nothing.

use tracing::{debug, trace};

use crate::cache::{CacheInfo, CacheStats, MemoStore};
use crate::clock;
use crate::config::CacheConfig;
use crate::error::{ConfigError, KeyError};
use crate::key::{CacheArg, CacheKey, KeyCodec};

// == Cache Engine ==
/// The core of one memoized function instance.
///
/// Owns the entry store, the statistics recorder and the key codec.
/// Exclusively owned by one facade; it holds no global state, so every
/// wrapped producer gets its own private cache with its own lifecycle.
#[derive(Debug)]
pub struct CacheEngine<V> {
    /// Entry storage with LRU ordering and lazy expiry
    store: MemoStore<V>,
    /// Monotonic hit/miss/eviction counters
    stats: CacheStats,
    /// Argument-to-key encoder
    codec: KeyCodec,
    /// Capacity bound; `None` means unbounded growth until expiry
    max_size: Option<usize>,
}

impl<V: Clone> CacheEngine<V> {
    // == Constructor ==
    /// Builds an engine from a configuration, validating it first.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store: MemoStore::new(config.ttl),
            stats: CacheStats::new(),
            codec: KeyCodec::new(config.typed),
            max_size: config.max_size,
        })
    }

    // == Encode Args ==
    /// Derives the cache key for a call's arguments.
    pub fn encode_args<A: CacheArg + ?Sized>(&self, args: &A) -> Result<CacheKey, KeyError> {
        self.codec.encode(args)
    }

    // == Probe ==
    /// Looks up `key`, recording a hit or a miss.
    ///
    /// Expired entries are swept before the lookup, so they read as
    /// misses. A hit marks the entry most recently used and returns a
    /// clone of the stored value.
    pub fn probe(&mut self, key: &CacheKey) -> Option<V> {
        let now = clock::now();
        match self.store.lookup(key, now) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                trace!(?key, "cache hit");
                Some(value)
            }
            None => {
                self.stats.record_miss();
                trace!(?key, "cache miss");
                None
            }
        }
    }

    // == Admit ==
    /// Stores a freshly produced value, then enforces the capacity bound.
    ///
    /// The just-inserted entry is most recently used, so it is never the
    /// one evicted.
    pub fn admit(&mut self, key: CacheKey, value: V) {
        let now = clock::now();
        self.store.insert(key, value, now);

        if let Some(max_size) = self.max_size {
            let evicted = self.store.evict_over_capacity(max_size);
            for _ in 0..evicted {
                self.stats.record_eviction();
            }
            if evicted > 0 {
                debug!(evicted, max_size, "evicted entries over capacity");
            }
        }
    }

    // == Info ==
    /// Produces a statistics snapshot, sweeping expired entries first.
    pub fn info(&mut self) -> CacheInfo {
        let now = clock::now();
        let swept = self.store.sweep_expired(now);
        if swept > 0 {
            debug!(swept, "swept expired entries");
        }

        CacheInfo {
            hits: self.stats.hits,
            misses: self.stats.misses,
            evictions: self.stats.evictions,
            max_size: self.max_size,
            current_size: self.store.len(),
            remaining_ttl: self.store.remaining_ttl(now),
        }
    }

    // == Clear ==
    /// Empties the store and resets all counters. Idempotent.
    pub fn clear(&mut self) {
        self.store.clear();
        self.stats.reset();
        debug!("cache cleared");
    }
}
