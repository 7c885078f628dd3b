//! Book Cache - A small book catalogue REST service
//!
//! CRUD over book records, with a read-through cache in front of the full
//! listing.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use tasks::spawn_cleanup_task;
