//! API Handlers
//!
//! HTTP request handlers for the book endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use super::extract::JsonBody;
use crate::cache::{CacheBackend, ReadThroughCache, BOOKS_CACHE_KEY};
use crate::config::Config;
use crate::error::{ApiError, Result, SeedError, StoreError};
use crate::models::requests::CREATE_FIELDS_MESSAGE;
use crate::models::{
    ApiResponse, BookListResponse, BookResponse, CreateBookRequest, UpdateBookRequest,
};
use crate::store::{seed_store, BookStore, MemoryBookStore};

const ALL_BOOKS_MESSAGE: &str = "All books retrieved";
const BOOK_NOT_FOUND: &str = "Book not found";
const INVALID_URL: &str = "Invalid URL";

/// Application state shared across all handlers.
///
/// Built once at startup and injected into every handler through axum's
/// `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative record store
    pub books: Arc<dyn BookStore>,
    /// Read-through helper for the cached listing
    pub cache: ReadThroughCache,
    /// Drop the cached listing after every successful write
    pub invalidate_on_write: bool,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        books: Arc<dyn BookStore>,
        cache_backend: Arc<dyn CacheBackend>,
        default_expiration: u64,
        invalidate_on_write: bool,
    ) -> Self {
        Self {
            books,
            cache: ReadThroughCache::new(cache_backend, default_expiration),
            invalidate_on_write,
        }
    }

    /// Opens the process-wide context: an in-memory store, seeded from the
    /// configured file, in front of the given cache backend.
    ///
    /// A missing seed file is logged and the store starts empty; an
    /// unreadable or invalid one fails startup.
    pub async fn open(
        config: &Config,
        cache_backend: Arc<dyn CacheBackend>,
    ) -> std::result::Result<Self, SeedError> {
        let books: Arc<dyn BookStore> = Arc::new(MemoryBookStore::new());

        if let Some(path) = &config.seed_file {
            match seed_store(books.as_ref(), path).await {
                Ok(_) => {}
                Err(SeedError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                    warn!("Seed file {} not found, starting empty", path.display());
                }
                Err(err) => return Err(err),
            }
        }

        Ok(Self::new(
            books,
            cache_backend,
            config.default_expiration,
            config.invalidate_on_write,
        ))
    }

    /// Releases the context at shutdown, flushing the cache.
    pub async fn close(&self) {
        self.cache.clear().await;
        info!("Application state closed");
    }

    async fn after_write(&self) {
        if self.invalidate_on_write {
            self.cache.invalidate(BOOKS_CACHE_KEY).await;
        }
    }
}

fn internal(err: StoreError) -> ApiError {
    warn!(error = %err, "Store operation failed");
    ApiError::Internal(err.to_string())
}

/// Handler for GET /api/books
///
/// Lists every book straight from the store.
pub async fn list_books_handler(State(state): State<AppState>) -> Result<Json<BookListResponse>> {
    let books = state.books.find().await.map_err(internal)?;
    Ok(Json(ApiResponse::success(ALL_BOOKS_MESSAGE, books)))
}

/// Handler for GET /api/books/cache
///
/// Lists every book through the read-through cache. The result may lag the
/// store by up to the configured expiration.
pub async fn list_cached_books_handler(
    State(state): State<AppState>,
) -> Result<Json<BookListResponse>> {
    let store = Arc::clone(&state.books);
    let books = state
        .cache
        .get_or_compute(BOOKS_CACHE_KEY, || async move { store.find().await })
        .await
        .map_err(internal)?;

    Ok(Json(ApiResponse::success(ALL_BOOKS_MESSAGE, books)))
}

/// Handler for POST /api/books
///
/// Store failures on create are reported as 400.
pub async fn create_book_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateBookRequest>,
) -> Result<(StatusCode, Json<BookResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::BadRequest(error_msg));
    }
    let book = req
        .into_book()
        .ok_or_else(|| ApiError::BadRequest(CREATE_FIELDS_MESSAGE.to_string()))?;

    let book = state
        .books
        .create(book)
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    info!(isbn13 = %book.isbn13, "Book created");
    state.after_write().await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("New book created", book)),
    ))
}

/// Handler for GET /api/books/:isbn13
pub async fn get_book_handler(
    State(state): State<AppState>,
    Path(isbn13): Path<String>,
) -> Result<Json<BookResponse>> {
    match state.books.find_one(&isbn13).await.map_err(internal)? {
        Some(book) => Ok(Json(ApiResponse::success("Book found", book))),
        None => Err(ApiError::NotFound(BOOK_NOT_FOUND.to_string())),
    }
}

/// Handler for PUT /api/books/:isbn13
///
/// Replaces author and title; the isbn13 never changes.
pub async fn update_book_handler(
    State(state): State<AppState>,
    Path(isbn13): Path<String>,
    JsonBody(req): JsonBody<UpdateBookRequest>,
) -> Result<Json<BookResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::BadRequest(error_msg));
    }

    let mut book = state
        .books
        .find_one(&isbn13)
        .await
        .map_err(internal)?
        .ok_or_else(|| ApiError::NotFound(BOOK_NOT_FOUND.to_string()))?;

    book.author = req.author.unwrap_or_default();
    book.title = req.title.unwrap_or_default();

    // None means the record was deleted between the lookup and the save
    let book = state
        .books
        .save(book)
        .await
        .map_err(internal)?
        .ok_or_else(|| ApiError::NotFound(BOOK_NOT_FOUND.to_string()))?;
    info!(isbn13 = %book.isbn13, "Book updated");
    state.after_write().await;

    Ok(Json(ApiResponse::success("Book updated", book)))
}

/// Handler for DELETE /api/books/:isbn13
pub async fn delete_book_handler(
    State(state): State<AppState>,
    Path(isbn13): Path<String>,
) -> Result<Json<ApiResponse>> {
    if !state.books.delete(&isbn13).await.map_err(internal)? {
        return Err(ApiError::NotFound(format!(
            "Book with ISBN13:{} does not exist",
            isbn13
        )));
    }
    info!(isbn13 = %isbn13, "Book deleted");
    state.after_write().await;

    Ok(Json(ApiResponse::message(format!(
        "Book with ISBN13:{} deleted",
        isbn13
    ))))
}

/// Fallback for any unmatched path or method.
pub async fn invalid_url_handler() -> ApiError {
    ApiError::NotFound(INVALID_URL.to_string())
}
