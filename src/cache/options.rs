//! Cache Options Module
//!
//! Construction-time limits for a cache.

use std::time::Duration;

use crate::error::{CacheError, Result};

/// Default maximum entry age: 5 minutes.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Default maximum number of entries.
pub const DEFAULT_MAX_SIZE: usize = 100;

// == Cache Options ==
/// Age and size bounds for a [`BoundedExpiringCache`](crate::cache::BoundedExpiringCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// Entries older than this are treated as absent.
    ///
    /// Ages are whole milliseconds and an age equal to `max_age` is still
    /// live, so with `Duration::ZERO` an entry read in the millisecond it was
    /// written is returned, and is gone from the next millisecond on.
    pub max_age: Duration,
    /// Maximum number of entries held at once, must be positive
    pub max_size: usize,
}

impl CacheOptions {
    /// Starts from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the maximum entry age.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Overrides the maximum entry count.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    // == Validate ==
    /// Rejects a zero `max_size`.
    pub fn validate(&self) -> Result<()> {
        validate_max_size(self.max_size)
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

pub(crate) fn validate_max_size(max_size: usize) -> Result<()> {
    if max_size == 0 {
        return Err(CacheError::InvalidConfig(
            "max_size must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
