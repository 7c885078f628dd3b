//! In-Memory Book Store
//!
//! Process-local implementation of [`BookStore`].

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::{validate_book, Book, ValidationResult};
use crate::store::BookStore;

// == Memory Book Store ==
/// Books kept in insertion order behind a tokio `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    records: RwLock<Vec<Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Normalizes and validates a record before it is written.
fn checked(book: Book) -> Result<Book, StoreError> {
    let book = book.normalized();
    match validate_book(&book) {
        ValidationResult::Valid => Ok(book),
        invalid => Err(StoreError::Validation(
            invalid.message().unwrap_or_default(),
        )),
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn find(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_one(&self, isbn13: &str) -> Result<Option<Book>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|b| b.isbn13 == isbn13).cloned())
    }

    async fn create(&self, book: Book) -> Result<Book, StoreError> {
        let book = checked(book)?;
        self.records.write().await.push(book.clone());
        Ok(book)
    }

    async fn save(&self, book: Book) -> Result<Option<Book>, StoreError> {
        let book = checked(book)?;
        let mut records = self.records.write().await;
        match records.iter_mut().find(|b| b.isbn13 == book.isbn13) {
            Some(slot) => {
                *slot = book.clone();
                Ok(Some(book))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, isbn13: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.iter().position(|b| b.isbn13 == isbn13) {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_many(&self, books: Vec<Book>) -> Result<usize, StoreError> {
        let books = books
            .into_iter()
            .map(checked)
            .collect::<Result<Vec<_>, _>>()?;
        let count = books.len();
        self.records.write().await.extend(books);
        Ok(count)
    }

    async fn delete_many(&self) -> Result<usize, StoreError> {
        let mut records = self.records.write().await;
        let count = records.len();
        records.clear();
        Ok(count)
    }
}
