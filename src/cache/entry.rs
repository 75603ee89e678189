//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age check.

use std::time::Duration;

use crate::cache::clock::{duration_ms, Timestamp};

// == Cache Entry ==
/// Represents a single cache entry with its value and insertion metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: Timestamp,
    /// Insertion order within the owning cache, lower is older
    pub sequence: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `inserted_at`.
    pub fn new(value: V, inserted_at: Timestamp, sequence: u64) -> Self {
        Self {
            value,
            inserted_at,
            sequence,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion, zero if `now` is earlier.
    pub fn age_ms(&self, now: Timestamp) -> u64 {
        now.saturating_sub(self.inserted_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `max_age`.
    ///
    /// Boundary condition: an entry whose age is exactly `max_age` is still
    /// fresh. It goes stale once its age is strictly greater.
    pub fn is_stale(&self, now: Timestamp, max_age: Duration) -> bool {
        self.age_ms(now) > duration_ms(max_age)
    }

    /// Ordering key for eviction: oldest insertion time first, then
    /// insertion order.
    pub(crate) fn eviction_rank(&self) -> (Timestamp, u64) {
        (self.inserted_at, self.sequence)
    }
}
