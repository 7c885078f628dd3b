//! Book Validation
//!
//! Field rules applied by the record store before a book is persisted.

use super::Book;

/// Required length of an ISBN-13.
pub const ISBN13_LENGTH: usize = 13;

/// Message reported when an isbn13 is malformed.
pub const ISBN13_MESSAGE: &str = "ISBN13 should have only 13 numeric characters.";

// == Validation Result ==
/// Outcome of validating a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        /// Name of the offending field
        field: &'static str,
        /// Human readable reason
        reason: String,
    },
}

impl ValidationResult {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Formats the failure as `field: reason`, or None when valid.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { field, reason } => Some(format!("{}: {}", field, reason)),
        }
    }
}

// == Validate ==
/// Checks every field of a book.
///
/// The isbn13 is checked after trimming, so callers should persist the
/// normalized form (see [`Book::normalized`]).
pub fn validate_book(book: &Book) -> ValidationResult {
    let isbn13 = book.isbn13.trim();
    if isbn13.is_empty() {
        return ValidationResult::invalid("isbn13", "Path `isbn13` is required.");
    }
    if !is_valid_isbn13(isbn13) {
        return ValidationResult::invalid("isbn13", ISBN13_MESSAGE);
    }
    if book.author.is_empty() {
        return ValidationResult::invalid("author", "Path `author` is required.");
    }
    if book.title.is_empty() {
        return ValidationResult::invalid("title", "Path `title` is required.");
    }
    ValidationResult::Valid
}

/// Returns true for exactly 13 ASCII digits.
pub fn is_valid_isbn13(value: &str) -> bool {
    value.len() == ISBN13_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}
