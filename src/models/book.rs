//! Book Model
//!
//! The single resource served by the API.

use serde::{Deserialize, Serialize};

// == Book ==
/// A book record, identified by its ISBN-13.
///
/// The identifier is not unique across the collection: seeded mock data may
/// contain several records sharing an isbn13.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// 13 digit ISBN, immutable after creation
    pub isbn13: String,
    /// Author display name
    pub author: String,
    /// Book title
    pub title: String,
}

impl Book {
    /// Creates a new book from its three fields.
    pub fn new(
        isbn13: impl Into<String>,
        author: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            isbn13: isbn13.into(),
            author: author.into(),
            title: title.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from the isbn13.
    pub fn normalized(mut self) -> Self {
        self.isbn13 = self.isbn13.trim().to_string();
        self
    }
}
