//! Cache Statistics Module
//!
//! Running counters plus the point-in-time snapshot returned by
//! [`BoundedExpiringCache::stats`](crate::cache::BoundedExpiringCache::stats).

use serde::Serialize;

use crate::cache::clock::Timestamp;

// == Cache Counters ==
/// Counters accumulated over the lifetime of a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheCounters {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed to honour the size bound
    pub evictions: u64,
    /// Entries removed because they outlived the age bound
    pub expirations: u64,
}

impl CacheCounters {
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

    // == Record Expirations ==
    /// Adds `count` purged entries to the expiration counter.
    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }
}

// == Cache Stats ==
/// Snapshot of a cache's size, limits and entry ages.
///
/// `oldest_item` and `newest_item` span every entry still in the map,
/// including expired ones not yet purged. On an empty cache they hold the
/// sentinel pair `oldest_item = now`, `newest_item = 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Raw entry count
    pub size: usize,
    /// Configured entry ceiling
    pub max_size: usize,
    /// Configured age bound in milliseconds
    pub max_age_ms: u64,
    /// Smallest insertion timestamp in the map
    pub oldest_item: Timestamp,
    /// Largest insertion timestamp in the map
    pub newest_item: Timestamp,
    /// Lifetime counters
    #[serde(flatten)]
    pub counters: CacheCounters,
}

impl CacheStats {
    // == Is Empty ==
    /// True when the snapshot was taken on an empty cache.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.counters.hits + self.counters.misses;
        if total == 0 {
            0.0
        } else {
            self.counters.hits as f64 / total as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(counters: CacheCounters) -> CacheStats {
        CacheStats {
            size: 0,
            max_size: 10,
            max_age_ms: 1_000,
            oldest_item: 50,
            newest_item: 0,
            counters,
        }
    }

    #[test]
    fn test_counters_default() {
        let counters = CacheCounters::default();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.evictions, 0);
        assert_eq!(counters.expirations, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(snapshot(CacheCounters::default()).hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut counters = CacheCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        assert_eq!(snapshot(counters).hit_rate(), 0.75);
    }

    #[test]
    fn test_record_eviction_and_expiration() {
        let mut counters = CacheCounters::default();
        counters.record_eviction();
        counters.record_expirations(3);
        counters.record_expirations(0);
        assert_eq!(counters.evictions, 1);
        assert_eq!(counters.expirations, 3);
    }

    #[test]
    fn test_stats_serialize_flattens_counters() {
        let mut counters = CacheCounters::default();
        counters.record_hit();
        let json = serde_json::to_value(snapshot(counters)).unwrap();

        assert_eq!(json["hits"], 1);
        assert_eq!(json["max_age_ms"], 1_000);
        assert!(json.get("counters").is_none());
    }

    #[test]
    fn test_empty_sentinel() {
        let stats = snapshot(CacheCounters::default());
        assert!(stats.is_empty());
        assert!(stats.oldest_item > stats.newest_item);
    }
}
