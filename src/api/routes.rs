//! API Routes
//!
//! Configures the Axum router with all cache service endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, config_handler, delete_handler, get_handler, has_handler, health_handler,
    keys_handler, set_handler, stats_handler, values_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /set` - Store a key-value pair
/// - `GET /get/:key` - Retrieve a value by key
/// - `GET /has/:key` - Check whether a key is live
/// - `DELETE /del/:key` - Delete a key
/// - `DELETE /clear` - Remove every entry
/// - `GET /keys` - List live keys
/// - `GET /values` - List live values
/// - `GET /stats` - Get cache statistics
/// - `PUT /config` - Change the age and/or size bound
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, the browser client is served from elsewhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set", put(set_handler))
        .route("/get/:key", get(get_handler))
        .route("/has/:key", get(has_handler))
        .route("/del/:key", delete(delete_handler))
        .route("/clear", delete(clear_handler))
        .route("/keys", get(keys_handler))
        .route("/values", get(values_handler))
        .route("/stats", get(stats_handler))
        .route("/config", put(config_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
