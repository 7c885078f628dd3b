//! Seed Data Loading
//!
//! Replaces the collection with the books listed in a JSON file at startup.

use std::path::Path;

use tracing::info;

use crate::error::{SeedError, StoreError};
use crate::models::{validate_book, Book};
use crate::store::BookStore;

/// Reads a JSON array of books from `path`.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Book>, SeedError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Clears the store and loads the books from `path`.
///
/// Returns the number of books inserted. The file is parsed and validated
/// before the collection is touched.
pub async fn seed_store(store: &dyn BookStore, path: &Path) -> Result<usize, SeedError> {
    let books = load_seed_file(path).await?;
    for book in &books {
        if let Some(message) = validate_book(book).message() {
            return Err(StoreError::Validation(message).into());
        }
    }

    let removed = store.delete_many().await?;
    info!("Seed: removed {} existing books", removed);

    let inserted = store.insert_many(books).await?;
    info!("Seed: loaded {} books from {}", inserted, path.display());
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBookStore;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("book_cache_{}_{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_seed_replaces_collection() {
        let store = MemoryBookStore::new();
        store
            .create(Book::new("0000000000000", "old", "old"))
            .await
            .unwrap();

        let path = temp_file(
            "valid.json",
            r#"[
                {"isbn13": "9780553173253", "author": "Stephen Hawking", "title": "A Brief History of Time"},
                {"isbn13": "9780553573404", "author": "George R. R. Martin", "title": "A Game of Thrones"}
            ]"#,
        );

        let inserted = seed_store(&store, &path).await.unwrap();
        assert_eq!(inserted, 2);
        assert!(store.find_one("0000000000000").await.unwrap().is_none());
        assert_eq!(store.find().await.unwrap().len(), 2);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_seed_missing_file() {
        let store = MemoryBookStore::new();
        let result = seed_store(&store, Path::new("/nonexistent/books.json")).await;
        assert!(matches!(result, Err(SeedError::Io(_))));
    }

    #[tokio::test]
    async fn test_seed_malformed_file_keeps_collection() {
        let store = MemoryBookStore::new();
        store
            .create(Book::new("0000000000000", "old", "old"))
            .await
            .unwrap();
        let path = temp_file("malformed.json", "{not json");

        let result = seed_store(&store, &path).await;
        assert!(matches!(result, Err(SeedError::Parse(_))));
        assert_eq!(store.find().await.unwrap().len(), 1);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_seed_invalid_record_keeps_collection() {
        let store = MemoryBookStore::new();
        store
            .create(Book::new("0000000000000", "old", "old"))
            .await
            .unwrap();
        let path = temp_file(
            "invalid.json",
            r#"[{"isbn13": "12", "author": "a", "title": "t"}]"#,
        );

        let result = seed_store(&store, &path).await;
        assert!(matches!(result, Err(SeedError::Store(StoreError::Validation(_)))));
        assert_eq!(store.find().await.unwrap().len(), 1);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_seed_shipped_data_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/mock-data.json");
        let books = load_seed_file(&path).await.unwrap();
        assert!(!books.is_empty());
    }
}
