//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;
use crate::error::{CacheError, FieldErrors, Result};

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON value
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
}

impl SetRequest {
    /// Validates the request data, reporting failures per field.
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        if self.key.is_empty() {
            push_error(&mut errors, "key", "Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            push_error(
                &mut errors,
                "key",
                format!("Key exceeds maximum length of {} bytes", MAX_KEY_LENGTH),
            );
        }

        into_result(errors)
    }
}

/// Request body for reconfiguring limits (PUT /config)
///
/// Either field may be omitted to leave that limit unchanged. Both are
/// signed so that non-positive values reach validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigRequest {
    /// New maximum entry age in milliseconds, non-positive means zero
    #[serde(default)]
    pub max_age_ms: Option<i64>,
    /// New maximum entry count, must be positive
    #[serde(default)]
    pub max_size: Option<i64>,
}

impl ConfigRequest {
    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();

        if self.max_age_ms.is_none() && self.max_size.is_none() {
            push_error(
                &mut errors,
                "body",
                "Provide max_age_ms, max_size, or both".to_string(),
            );
        }
        if matches!(self.max_size, Some(size) if size <= 0) {
            push_error(
                &mut errors,
                "max_size",
                "max_size must be greater than zero".to_string(),
            );
        }

        into_result(errors)
    }

    /// Requested age bound, with negative values clamped to zero.
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age_ms
            .map(|ms| Duration::from_millis(u64::try_from(ms).unwrap_or(0)))
    }

    /// Requested size bound. Call after [`validate`](Self::validate).
    pub fn max_size(&self) -> Option<usize> {
        self.max_size.map(|size| usize::try_from(size).unwrap_or(0))
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: String) {
    errors.entry(field.to_string()).or_default().push(message);
}

fn into_result(errors: FieldErrors) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CacheError::Validation(errors))
    }
}
