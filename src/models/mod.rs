//! Domain model and HTTP DTOs
//!
//! The book record, its validation rules, and the request/response bodies
//! exchanged by the API.

pub mod book;
pub mod requests;
pub mod responses;
pub mod validation;

// Re-export commonly used types
pub use book::Book;
pub use requests::{CreateBookRequest, UpdateBookRequest};
pub use responses::{ApiResponse, BookListResponse, BookResponse};
pub use validation::{validate_book, ValidationResult};
