//! Error types for the book service
//!
//! Provides unified error handling using thiserror. Only [`ApiError`] ever
//! reaches a client; store and cache errors are translated by the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ApiResponse;

// == API Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed request data, or a rejected create
    #[error("{0}")]
    BadRequest(String),

    /// Lookup by key yielded nothing
    #[error("{0}")]
    NotFound(String),

    /// Store or infrastructure failure
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

// == Store Error Enum ==
/// Failures reported by a record store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Field level validation rejected the record
    #[error("Book validation failed: {0}")]
    Validation(String),

    /// The store could not be reached or failed to persist
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// == Cache Error Enum ==
/// Failures reported by a cache backend. Never surfaced to clients.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key has expired
    #[error("Key expired: {0}")]
    Expired(String),

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend could not be reached
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

// == Seed Error Enum ==
/// Failures while loading the seed data file.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
