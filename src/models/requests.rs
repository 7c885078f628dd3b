//! Request DTOs for the book API
//!
//! Defines the structure of incoming HTTP request bodies. Every field is
//! optional at the serde level so that missing fields surface as a
//! validation message instead of a deserialization failure.

use serde::Deserialize;

use super::Book;

/// Message returned when a create payload is incomplete.
pub const CREATE_FIELDS_MESSAGE: &str = "Request body should have isbn13, author and title";

/// Message returned when an update payload is incomplete.
pub const UPDATE_FIELDS_MESSAGE: &str = "Request body should have author and title.";

/// Request body for POST /api/books
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub isbn13: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl CreateBookRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if is_blank(&self.isbn13) || is_blank(&self.author) || is_blank(&self.title) {
            return Some(CREATE_FIELDS_MESSAGE.to_string());
        }
        None
    }

    /// Converts a validated request into a book.
    ///
    /// Returns None when any field is missing.
    pub fn into_book(self) -> Option<Book> {
        Some(Book::new(self.isbn13?, self.author?, self.title?))
    }
}

/// Request body for PUT /api/books/:isbn13
///
/// An isbn13 sent in the body is ignored; the identifier is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl UpdateBookRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if is_blank(&self.author) || is_blank(&self.title) {
            return Some(UPDATE_FIELDS_MESSAGE.to_string());
        }
        None
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}
