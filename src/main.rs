//! Book Cache - A small book catalogue REST service
//!
//! CRUD over book records, with a read-through cache in front of the full
//! listing.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_cache::cache::MemoryCache;
use book_cache::{create_router, spawn_cleanup_task, AppState, Config};

/// Main entry point for the book service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the application state (store, seed data, cache)
/// 4. Start background cache sweep
/// 5. Serve the router until SIGINT/SIGTERM
/// 6. Abort the sweep and close the application state
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting book service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, default_expiration={}s, cleanup_interval={}s, invalidate_on_write={}",
        config.server_port,
        config.default_expiration,
        config.cleanup_interval,
        config.invalidate_on_write
    );

    let cache = MemoryCache::new();
    let state = AppState::open(&config, Arc::new(cache.clone()))
        .await
        .context("failed to open application state")?;
    info!("Application state opened");

    let cleanup_handle = spawn_cleanup_task(cache, config.cleanup_interval);

    let app = create_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    cleanup_handle.abort();
    info!("Cache sweep stopped");
    state.close().await;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
