//! API Routes
//!
//! Configures the Axum router with all book endpoints.

use axum::{
    http::Method,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_book_handler, delete_book_handler, get_book_handler, invalid_url_handler,
    list_books_handler, list_cached_books_handler, update_book_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/books` - List all books from the store
/// - `POST /api/books` - Create a book
/// - `GET /api/books/cache` - List all books through the cache
/// - `GET /api/books/:isbn13` - Get a book
/// - `PUT /api/books/:isbn13` - Update author and title
/// - `DELETE /api/books/:isbn13` - Delete a book
///
/// Any other path, or an unsupported method on a known path, answers
/// 404 `Invalid URL`.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/books",
            with_fallback(get(list_books_handler).post(create_book_handler)),
        )
        .route(
            "/api/books/cache",
            with_fallback(get(list_cached_books_handler)),
        )
        .route(
            "/api/books/:isbn13",
            with_fallback(
                get(get_book_handler)
                    .put(update_book_handler)
                    .delete(delete_book_handler),
            ),
        )
        .fallback(invalid_url_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn with_fallback(router: MethodRouter<AppState>) -> MethodRouter<AppState> {
    router.fallback(invalid_url_handler)
}
