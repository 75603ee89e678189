//! Configuration Module
//!
//! Handles loading the service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{CacheOptions, DEFAULT_MAX_AGE, DEFAULT_MAX_SIZE};

const DEFAULT_SERVER_PORT: u16 = 3000;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum entry age in milliseconds
    pub max_age_ms: u64,
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_AGE_MS` - Maximum entry age in milliseconds (default: 300000)
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 100)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_age_ms: parse_var("CACHE_MAX_AGE_MS").unwrap_or(defaults.max_age_ms),
            max_size: parse_var("CACHE_MAX_SIZE").unwrap_or(defaults.max_size),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }

    /// Cache limits described by this configuration.
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions::new()
            .with_max_age(Duration::from_millis(self.max_age_ms))
            .with_max_size(self.max_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_age_ms: DEFAULT_MAX_AGE.as_millis() as u64,
            max_size: DEFAULT_MAX_SIZE,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
