//! Cache Store Module
//!
//! Main cache engine: a string-keyed map bounded by entry count and entry age.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::clock::{duration_ms, Clock, SystemClock};
use crate::cache::options::validate_max_size;
use crate::cache::{CacheCounters, CacheEntry, CacheOptions, CacheStats};
use crate::error::Result;

// == Bounded Expiring Cache ==
/// String-keyed cache with an age bound and a size bound.
///
/// Expired entries are removed lazily, when a lookup or sweep finds them.
/// When a new key arrives at capacity, the entry with the oldest insertion
/// time is evicted. Reads never touch insertion time, so this is not LRU.
///
/// All methods take `&mut self` or `&self`; wrap the cache in a lock to share
/// it between threads.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use expiring_cache::cache::{BoundedExpiringCache, CacheOptions};
///
/// let options = CacheOptions::new()
///     .with_max_age(Duration::from_secs(60))
///     .with_max_size(2);
/// let mut cache = BoundedExpiringCache::new(options).unwrap();
///
/// cache.set("a", 1);
/// cache.set("b", 2);
/// cache.set("c", 3);
///
/// assert_eq!(cache.len(), 2);
/// assert_eq!(cache.get("c"), Some(3));
/// ```
#[derive(Debug)]
pub struct BoundedExpiringCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Entries older than this are treated as absent
    max_age: Duration,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Next insertion sequence number
    next_sequence: u64,
    /// Lifetime counters
    counters: CacheCounters,
    /// Time source
    clock: C,
}

impl<V> BoundedExpiringCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a cache on the system clock.
    ///
    /// Fails if `options.max_size` is zero.
    pub fn new(options: CacheOptions) -> Result<Self> {
        Self::with_clock(options, SystemClock)
    }
}

impl<V> Default for BoundedExpiringCache<V, SystemClock> {
    /// A 5 minute, 100 entry cache.
    fn default() -> Self {
        Self::build(CacheOptions::default(), SystemClock)
    }
}

impl<V, C: Clock> BoundedExpiringCache<V, C> {
    /// Creates a cache with a custom clock.
    pub fn with_clock(options: CacheOptions, clock: C) -> Result<Self> {
        options.validate()?;
        Ok(Self::build(options, clock))
    }

    fn build(options: CacheOptions, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            max_age: options.max_age,
            max_size: options.max_size,
            next_sequence: 0,
            counters: CacheCounters::default(),
            clock,
        }
    }

    // == Set ==
    /// Stores a value, replacing any existing entry and its timestamp.
    ///
    /// If `key` is new and the cache is full, the oldest entry is evicted
    /// first. Overwriting an existing key never evicts.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();

        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        let now = self.clock.now_ms();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.entries.insert(key, CacheEntry::new(value, now, sequence));
    }

    // == Get ==
    /// Returns a copy of the live value for `key`.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let value = self.live_entry(key).map(|entry| entry.value.clone());

        if value.is_some() {
            self.counters.record_hit();
        } else {
            self.counters.record_miss();
        }
        value
    }

    // == Has ==
    /// Checks for a live entry without copying its value.
    ///
    /// Shares the lazy removal of [`get`](Self::get) but not its hit/miss
    /// counters. A stale hit still counts as an expiration.
    pub fn has(&mut self, key: &str) -> bool {
        self.live_entry(key).is_some()
    }

    // == Delete ==
    /// Removes an entry. Returns whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Length ==
    /// Raw number of entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Keys ==
    /// Purges expired entries and returns the remaining keys.
    pub fn keys(&mut self) -> Vec<String> {
        self.purge_expired();
        self.entries.keys().cloned().collect()
    }

    // == Values ==
    /// Purges expired entries and returns copies of the remaining values.
    pub fn values(&mut self) -> Vec<V>
    where
        V: Clone,
    {
        self.purge_expired();
        self.entries
            .values()
            .map(|entry| entry.value.clone())
            .collect()
    }

    // == Max Age ==
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Changes the age bound and immediately purges entries it makes stale.
    ///
    /// Returns the number of entries purged.
    pub fn set_max_age(&mut self, max_age: Duration) -> usize {
        debug!(max_age_ms = duration_ms(max_age), "Updating cache max age");
        self.max_age = max_age;
        self.purge_expired()
    }

    // == Max Size ==
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Changes the size bound, evicting oldest entries until it holds.
    ///
    /// Returns the number of entries evicted. A zero bound is rejected and
    /// leaves the cache untouched.
    pub fn set_max_size(&mut self, max_size: usize) -> Result<usize> {
        validate_max_size(max_size)?;
        debug!(max_size, "Updating cache max size");
        self.max_size = max_size;

        let mut evicted = 0;
        while self.entries.len() > self.max_size {
            if self.evict_oldest().is_none() {
                break;
            }
            evicted += 1;
        }
        Ok(evicted)
    }

    // == Stats ==
    /// Returns a snapshot of size, limits, entry ages and counters.
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now_ms();
        let timestamps = self.entries.values().map(|entry| entry.inserted_at);

        CacheStats {
            size: self.entries.len(),
            max_size: self.max_size,
            max_age_ms: duration_ms(self.max_age),
            oldest_item: timestamps.clone().min().unwrap_or(now),
            newest_item: timestamps.max().unwrap_or(0),
            counters: self.counters,
        }
    }

    // == Internals ==
    /// Looks up `key`, dropping it if it has expired.
    fn live_entry(&mut self, key: &str) -> Option<&CacheEntry<V>> {
        let now = self.clock.now_ms();
        if self.entries.get(key)?.is_stale(now, self.max_age) {
            self.entries.remove(key);
            self.counters.record_expirations(1);
            debug!(key, "Purged expired cache entry on access");
            return None;
        }
        self.entries.get(key)
    }

    /// Removes every expired entry. Returns how many were removed.
    fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let max_age = self.max_age;
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_stale(now, max_age));

        let purged = before - self.entries.len();
        if purged > 0 {
            self.counters.record_expirations(purged);
            debug!(purged, "Purged expired cache entries");
        }
        purged
    }

    /// Removes the entry with the oldest insertion time.
    fn evict_oldest(&mut self) -> Option<String> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.eviction_rank())
            .map(|(key, _)| key.clone())?;

        self.entries.remove(&oldest);
        self.counters.record_eviction();
        debug!(key = %oldest, "Evicted oldest cache entry");
        Some(oldest)
    }
}
