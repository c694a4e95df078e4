//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::hash::Hash;

use linked_hash_map::LinkedHashMap;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in a `LinkedHashMap` where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// Touch, removal and eviction are all O(1).
#[derive(Debug, Default)]
pub struct LruTracker<K: Hash + Eq> {
    /// Keys ordered by last access
    order: LinkedHashMap<K, ()>,
}

impl<K: Hash + Eq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: LinkedHashMap::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// An existing key is moved to the back; a new key is appended there.
    pub fn touch(&mut self, key: &K) {
        if self.order.get_refresh(key).is_none() {
            self.order.insert(key.clone(), ());
        }
    }

    // == Remove ==
    /// Removes a key from the tracker. Unknown keys are ignored.
    pub fn remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_front().map(|(key, ())| key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.front().map(|(key, ())| key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.order.contains_key(key)
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }
}
