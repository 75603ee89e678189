//! Cache Module
//!
//! Provides a string-keyed in-memory cache bounded by entry age and entry count.

mod clock;
mod entry;
mod options;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock, Timestamp};
pub use entry::CacheEntry;
pub use options::{CacheOptions, DEFAULT_MAX_AGE, DEFAULT_MAX_SIZE};
pub use stats::{CacheCounters, CacheStats};
pub use store::BoundedExpiringCache;

// == Public Constants ==
/// Maximum allowed key length in bytes for keys arriving over HTTP
pub const MAX_KEY_LENGTH: usize = 256;
