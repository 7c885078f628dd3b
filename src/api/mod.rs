//! API Module
//!
//! HTTP handlers and routing for the book REST API.

pub mod extract;
pub mod handlers;
pub mod routes;


pub use extract::JsonBody;
pub use handlers::*;
pub use routes::create_router;
