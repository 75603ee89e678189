//! Expiring Cache - a bounded, time-aware key/value cache
//!
//! The core is [`cache::BoundedExpiringCache`]: string keys, an age bound
//! enforced lazily, and a size bound enforced by evicting the oldest entry.
//! The `api` module exposes one shared cache over HTTP for the web client.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{BoundedExpiringCache, CacheOptions, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
