//! Entry Store Module
//!
//! Keyed storage for memoized results, combining HashMap lookup with LRU
//! access ordering and lazy TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, LruTracker};
use crate::clock::Instant;
use crate::key::CacheKey;

// == Memo Store ==
/// Holds `{key -> (value, insertion time)}` plus the access ordering
/// needed for eviction.
///
/// Expired entries are removed lazily: every read path sweeps them out
/// before answering, so an expired entry is never served and never
/// counts toward the live size. The map and the LRU tracker are kept in
/// lockstep; a key present in one is present in the other.
#[derive(Debug)]
pub struct MemoStore<V> {
    /// Key-value storage
    entries: HashMap<CacheKey, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker<CacheKey>,
    /// Uniform time-to-live for every entry
    ttl: Duration,
}

impl<V> MemoStore<V> {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            ttl,
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Lookup ==
    /// Retrieves the live entry for `key`, marking it most recently used.
    ///
    /// Sweeps all expired entries first, so a stale entry under `key`
    /// reads as absent rather than as a hit.
    pub fn lookup(&mut self, key: &CacheKey, now: Instant) -> Option<&V> {
        self.sweep_expired(now);

        if let Some(entry) = self.entries.get(key) {
            self.lru.touch(key);
            Some(&entry.value)
        } else {
            None
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, inserted at `now`.
    ///
    /// An existing entry under the same key is replaced wholesale, which
    /// also restarts its TTL.
    pub fn insert(&mut self, key: CacheKey, value: V, now: Instant) {
        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value, now));
    }

    // == Remove ==
    /// Removes an entry by key. Returns whether a live entry was present.
    pub fn remove(&mut self, key: &CacheKey) -> bool {
        self.lru.remove(key);
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Drops every entry. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    // == Sweep Expired ==
    /// Removes all entries whose TTL has elapsed at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let expired_keys: Vec<CacheKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, ttl))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        expired_keys.len()
    }

    // == Evict Over Capacity ==
    /// Evicts least-recently-used entries until at most `max_size` remain.
    ///
    /// Returns the number of entries evicted. Eviction never fails; it is
    /// observable only through the reduced size and later misses.
    pub fn evict_over_capacity(&mut self, max_size: usize) -> usize {
        let mut evicted = 0;
        while self.entries.len() > max_size {
            match self.lru.evict_oldest() {
                Some(key) => {
                    self.entries.remove(&key);
                    evicted += 1;
                }
                // tracker and map are maintained in lockstep, so an empty
                // tracker means an empty map and the loop cannot be here
                None => break,
            }
        }
        evicted
    }

    // == Remaining TTL ==
    /// Time left for the soonest-to-expire live entry at `now`.
    ///
    /// Returns zero when the store is empty. Expired-but-unswept entries
    /// saturate to zero rather than going negative.
    pub fn remaining_ttl(&self, now: Instant) -> Duration {
        self.entries
            .values()
            .map(|entry| entry.remaining_ttl(now, self.ttl))
            .min()
            .unwrap_or(Duration::ZERO)
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Contains ==
    /// Checks for a key without touching access order or sweeping.
    #[cfg(test)]
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;
    use crate::key::KeyCodec;
    use mock_instant::global::MockClock;

    const TTL: Duration = Duration::from_secs(10);

    fn key(name: &str) -> CacheKey {
        KeyCodec::new(false).encode(name).unwrap()
    }

    fn store() -> MemoStore<String> {
        MemoStore::new(TTL)
    }

    #[test]
    fn test_store_new() {
        let store = store();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_insert_and_lookup() {
        let mut store = store();

        store.insert(key("k1"), "v1".to_string(), clock::now());

        assert_eq!(store.lookup(&key("k1"), clock::now()), Some(&"v1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_missing() {
        let mut store = store();
        assert_eq!(store.lookup(&key("nope"), clock::now()), None);
    }

    #[test]
    fn test_store_remove() {
        let mut store = store();

        store.insert(key("k1"), "v1".to_string(), clock::now());
        assert!(store.remove(&key("k1")));

        assert!(store.is_empty());
        assert_eq!(store.lookup(&key("k1"), clock::now()), None);
        assert!(!store.remove(&key("k1")));
    }

    #[test]
    fn test_store_replace_restarts_ttl() {
        let mut store = store();

        store.insert(key("k1"), "v1".to_string(), clock::now());
        MockClock::advance(Duration::from_secs(8));

        // reinsert two seconds before expiry; the fresh entry gets a full TTL
        store.insert(key("k1"), "v2".to_string(), clock::now());
        MockClock::advance(Duration::from_secs(8));

        assert_eq!(store.lookup(&key("k1"), clock::now()), Some(&"v2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_sweeps_expired() {
        let mut store = store();

        store.insert(key("old"), "v1".to_string(), clock::now());
        MockClock::advance(Duration::from_secs(5));
        store.insert(key("young"), "v2".to_string(), clock::now());
        MockClock::advance(Duration::from_secs(6));

        // "old" is 11s in, "young" 6s in; looking up anything drops "old"
        assert_eq!(store.lookup(&key("young"), clock::now()), Some(&"v2".to_string()));
        assert_eq!(store.len(), 1);
        assert!(!store.contains(&key("old")));
    }

    #[test]
    fn test_store_expired_key_reads_as_absent() {
        let mut store = store();

        store.insert(key("k1"), "v1".to_string(), clock::now());
        MockClock::advance(TTL);

        assert_eq!(store.lookup(&key("k1"), clock::now()), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_sweep_expired_counts() {
        let mut store = store();

        store.insert(key("a"), "v".to_string(), clock::now());
        store.insert(key("b"), "v".to_string(), clock::now());
        MockClock::advance(Duration::from_secs(5));
        store.insert(key("c"), "v".to_string(), clock::now());
        MockClock::advance(Duration::from_secs(5));

        assert_eq!(store.sweep_expired(clock::now()), 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_evict_over_capacity_lru_order() {
        let mut store = store();

        store.insert(key("k1"), "v1".to_string(), clock::now());
        store.insert(key("k2"), "v2".to_string(), clock::now());
        store.insert(key("k3"), "v3".to_string(), clock::now());

        // touch k1 so k2 becomes the eviction candidate
        store.lookup(&key("k1"), clock::now());

        assert_eq!(store.evict_over_capacity(2), 1);
        assert_eq!(store.len(), 2);
        assert!(store.contains(&key("k1")));
        assert!(!store.contains(&key("k2")));
        assert!(store.contains(&key("k3")));
    }

    #[test]
    fn test_store_evict_noop_under_capacity() {
        let mut store = store();

        store.insert(key("k1"), "v1".to_string(), clock::now());
        assert_eq!(store.evict_over_capacity(5), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_remaining_ttl_tracks_oldest() {
        let mut store = store();
        assert_eq!(store.remaining_ttl(clock::now()), Duration::ZERO);

        store.insert(key("old"), "v".to_string(), clock::now());
        MockClock::advance(Duration::from_secs(4));
        store.insert(key("young"), "v".to_string(), clock::now());

        // oldest entry has 6s left, the younger one 10s
        assert_eq!(store.remaining_ttl(clock::now()), Duration::from_secs(6));
    }

    #[test]
    fn test_store_clear_is_idempotent() {
        let mut store = store();

        store.insert(key("k1"), "v1".to_string(), clock::now());
        store.clear();
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.remaining_ttl(clock::now()), Duration::ZERO);
    }
}
