//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::info;

use crate::api::ApiJson;
use crate::cache::{BoundedExpiringCache, CacheOptions};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, ConfigRequest, ConfigResponse, DeleteResponse, GetResponse, HasResponse,
    HealthResponse, KeysResponse, SetRequest, SetResponse, StatsResponse, ValuesResponse,
};

/// Cache of arbitrary JSON values as served over HTTP.
pub type JsonCache = BoundedExpiringCache<Value>;

/// Application state shared across all handlers.
///
/// The cache does no locking of its own. Every call that can remove entries
/// (including plain lookups, which purge expired ones) takes the write lock.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache behind a single lock
    pub cache: Arc<RwLock<JsonCache>>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: JsonCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState with a fresh cache built from `options`.
    pub fn with_options(options: CacheOptions) -> Result<Self> {
        Ok(Self::new(BoundedExpiringCache::new(options)?))
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_options(config.cache_options())
    }
}

/// Handler for PUT /set
pub async fn set_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SetRequest>,
) -> Result<Json<SetResponse>> {
    req.validate()?;

    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Expired and missing keys both answer 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    // Write lock: a stale hit is purged
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /has/:key
pub async fn has_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<HasResponse> {
    let present = state.cache.write().await.has(&key);
    Json(HasResponse { key, present })
}

/// Handler for DELETE /del/:key
///
/// Deleting an absent key succeeds with `removed: false`.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteResponse> {
    let removed = state.cache.write().await.delete(&key);
    Json(DeleteResponse::new(key, removed))
}

/// Handler for DELETE /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.write().await.clear();
    Json(ClearResponse::new())
}

/// Handler for GET /keys
pub async fn keys_handler(State(state): State<AppState>) -> Json<KeysResponse> {
    let keys = state.cache.write().await.keys();
    Json(KeysResponse { keys })
}

/// Handler for GET /values
pub async fn values_handler(State(state): State<AppState>) -> Json<ValuesResponse> {
    let values = state.cache.write().await.values();
    Json(ValuesResponse { values })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(cache.stats()))
}

/// Handler for PUT /config
///
/// Applies the age bound before the size bound, so entries made stale by the
/// new age are purged rather than counted as evictions.
pub async fn config_handler(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ConfigRequest>,
) -> Result<Json<ConfigResponse>> {
    req.validate()?;

    let mut cache = state.cache.write().await;

    let purged = req
        .max_age()
        .map(|max_age| cache.set_max_age(max_age))
        .unwrap_or(0);
    let evicted = match req.max_size() {
        Some(max_size) => cache.set_max_size(max_size)?,
        None => 0,
    };

    let stats = cache.stats();
    info!(
        max_age_ms = stats.max_age_ms,
        max_size = stats.max_size,
        purged,
        evicted,
        "Cache limits updated"
    );

    Ok(Json(ConfigResponse {
        max_age_ms: stats.max_age_ms,
        max_size: stats.max_size,
        purged,
        evicted,
    }))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
