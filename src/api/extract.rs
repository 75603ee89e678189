//! Request Extractors
//!
//! JSON body extraction that rejects with [`CacheError`] instead of axum's
//! plain-text rejection.

use axum::extract::FromRequest;

use crate::error::CacheError;

/// `axum::Json` with a [`CacheError`] rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CacheError))]
pub struct ApiJson<T>(pub T);
