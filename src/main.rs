//! commitscrape - GitHub contribution calendar scraper
//!
//! Fetches a profile's contribution calendar, re-renders it as an
//! embeddable HTML fragment, and serves it over HTTP with TTL caching
//! and column trimming.

mod api;
mod cache;
mod calendar;
mod config;
mod error;
mod models;
mod scrape;
mod tasks;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::spawn_sweeper_task;

/// Main entry point for the commitscrape server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from config.toml (defaults if absent)
/// 3. Create application state (cache, scraper, shared HTTP client)
/// 4. Start background fragment sweeper
/// 5. Create Axum router with CORS from configuration
/// 6. Start HTTP server on the configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commitscrape=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting commitscrape");

    // Load configuration from config.toml, defaults if absent
    let config = Config::load();
    info!(
        "Configuration loaded: port={}, default user={}, expire={}s",
        config.port, config.username, config.expire
    );

    let port = config.port;
    let sweep_interval = config.sweep_interval;

    // Create application state with cache, scraper, and shared client
    let state = AppState::from_config(config);
    info!("Fragment cache initialized");

    // Start background sweeper task
    let sweeper_handle = spawn_sweeper_task(state.cache.store(), sweep_interval);
    info!("Background sweeper task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    info!("Listening for commitscrape requests on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweeper_handle))
        .await
        .unwrap();

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweeper task and allows graceful shutdown.
async fn shutdown_signal(sweeper_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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

    // Abort the sweeper task
    sweeper_handle.abort();
    warn!("Sweeper task aborted");
}
