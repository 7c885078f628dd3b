//! Response DTOs for the book API
//!
//! Every endpoint answers with the same envelope:
//! `{status: "success" | "error", message, data?}`.

use serde::Serialize;

use super::Book;

/// Envelope status for successful responses.
pub const STATUS_SUCCESS: &str = "success";
/// Envelope status for failed responses.
pub const STATUS_ERROR: &str = "error";

/// Response envelope shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T = ()> {
    /// "success" or "error"
    pub status: &'static str,
    /// Human readable message
    pub message: String,
    /// Payload, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Creates a success envelope carrying data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse {
    /// Creates a success envelope without data
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: message.into(),
            data: None,
        }
    }

    /// Creates an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
            data: None,
        }
    }
}

/// Envelope for a single book.
pub type BookResponse = ApiResponse<Book>;

/// Envelope for a book listing.
pub type BookListResponse = ApiResponse<Vec<Book>>;
