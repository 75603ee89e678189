//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::error::FieldErrors;

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: Value,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for the presence check (GET /has/:key)
#[derive(Debug, Clone, Serialize)]
pub struct HasResponse {
    /// The requested key
    pub key: String,
    /// Whether a live entry exists for the key
    pub present: bool,
}

/// Response body for the DELETE operation (DELETE /del/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Outcome message
    pub message: String,
    /// The key that was targeted
    pub key: String,
    /// Whether an entry was actually removed
    pub removed: bool,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>, removed: bool) -> Self {
        let key = key.into();
        let message = if removed {
            format!("Key '{}' deleted successfully", key)
        } else {
            format!("Key '{}' was not present", key)
        };
        Self {
            message,
            key,
            removed,
        }
    }
}

/// Response body for DELETE /clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for GET /keys
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// Live keys, in no particular order
    pub keys: Vec<String>,
}

/// Response body for GET /values
#[derive(Debug, Clone, Serialize)]
pub struct ValuesResponse {
    /// Live values, in no particular order
    pub values: Vec<Value>,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Cache snapshot, flattened into the top-level object
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache snapshot
    pub fn new(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self { stats, hit_rate }
    }
}

/// Response body for PUT /config
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    /// Age bound now in effect
    pub max_age_ms: u64,
    /// Size bound now in effect
    pub max_size: usize,
    /// Entries purged because the new age bound made them stale
    pub purged: usize,
    /// Entries evicted to fit the new size bound
    pub evicted: usize,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: &'static str,
    /// Error message describing what went wrong
    pub message: String,
    /// HTTP status code
    pub code: u16,
    /// Per-field messages for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            status: "error",
            message: message.into(),
            code,
            errors: None,
        }
    }

    /// Attaches per-field validation messages
    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheCounters;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("test_key", Value::from("test_value"));
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("test_key"));
        assert!(json.contains("test_value"));
    }

    #[test]
    fn test_set_response_serialize() {
        let resp = SetResponse::new("my_key");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("my_key"));
        assert!(json.contains("successfully"));
    }

    #[test]
    fn test_delete_response_messages() {
        let removed = DeleteResponse::new("deleted_key", true);
        assert!(removed.message.contains("deleted"));

        let absent = DeleteResponse::new("ghost", false);
        assert!(!absent.removed);
        assert!(absent.message.contains("not present"));
    }

    #[test]
    fn test_stats_response_flattens_snapshot() {
        let stats = CacheStats {
            size: 2,
            max_size: 10,
            max_age_ms: 1_000,
            oldest_item: 5,
            newest_item: 9,
            counters: CacheCounters {
                hits: 80,
                misses: 20,
                evictions: 5,
                expirations: 1,
            },
        };
        let json = serde_json::to_value(StatsResponse::new(stats)).unwrap();

        assert_eq!(json["size"], 2);
        assert_eq!(json["oldest_item"], 5);
        assert_eq!(json["evictions"], 5);
        assert!((json["hit_rate"].as_f64().unwrap() - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_omits_empty_errors() {
        let resp = ErrorResponse::new("Something went wrong", 500);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], 500);
        assert!(json.get("errors").is_none());
    }
}
