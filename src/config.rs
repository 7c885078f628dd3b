//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Seed file loaded at startup unless `SEED_FILE` overrides it.
pub const DEFAULT_SEED_FILE: &str = "data/mock-data.json";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Lifetime in seconds of the cached book listing
    pub default_expiration: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// JSON file of books loaded at startup, None to start empty
    pub seed_file: Option<PathBuf>,
    /// Drop the cached listing after every successful write
    pub invalidate_on_write: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `DEFAULT_EXPIRATION` - Cached listing lifetime in seconds (default: 60)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `SEED_FILE` - Seed data path, empty to disable (default: data/mock-data.json)
    /// - `INVALIDATE_ON_WRITE` - `true`/`1` to invalidate on writes (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("PORT").unwrap_or(defaults.server_port),
            default_expiration: parse_var("DEFAULT_EXPIRATION")
                .unwrap_or(defaults.default_expiration),
            cleanup_interval: parse_var("CLEANUP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
            seed_file: match env::var("SEED_FILE") {
                Ok(path) if path.trim().is_empty() => None,
                Ok(path) => Some(PathBuf::from(path)),
                Err(_) => defaults.seed_file,
            },
            invalidate_on_write: env::var("INVALIDATE_ON_WRITE")
                .ok()
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.invalidate_on_write),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            default_expiration: 60,
            cleanup_interval: 1,
            seed_file: Some(PathBuf::from(DEFAULT_SEED_FILE)),
            invalidate_on_write: false,
        }
    }
}
