//! API Module
//!
//! HTTP handlers and routing for the cache service, the key/value surface
//! the web client talks to.

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::ApiJson;
pub use handlers::*;
pub use routes::create_router;
