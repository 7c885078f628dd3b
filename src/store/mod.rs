//! Record Store Module
//!
//! The authoritative persistence layer for book records.

mod memory;
mod seed;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Book;

pub use memory::MemoryBookStore;
pub use seed::{load_seed_file, seed_store};

// == Book Store Trait ==
/// Document-style store of books keyed by isbn13.
///
/// The isbn13 is not unique. When several records share one, `find_one`,
/// `save` and `delete` address the first match in insertion order. Each call
/// is atomic on its own; there are no multi-record transactions.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Returns every record in insertion order.
    async fn find(&self) -> Result<Vec<Book>, StoreError>;

    /// Returns the first record with the given isbn13.
    async fn find_one(&self, isbn13: &str) -> Result<Option<Book>, StoreError>;

    /// Validates and persists a new record, returning it as stored.
    async fn create(&self, book: Book) -> Result<Book, StoreError>;

    /// Validates and writes back a record previously returned by `find_one`.
    ///
    /// Returns None if the record no longer exists.
    async fn save(&self, book: Book) -> Result<Option<Book>, StoreError>;

    /// Removes the first record with the given isbn13.
    async fn delete(&self, isbn13: &str) -> Result<bool, StoreError>;

    /// Validates and appends many records at once. All or nothing.
    async fn insert_many(&self, books: Vec<Book>) -> Result<usize, StoreError>;

    /// Removes every record, returning how many were removed.
    async fn delete_many(&self) -> Result<usize, StoreError>;
}
