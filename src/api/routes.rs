//! API Routes
//!
//! Configures the Axum router with the calendar endpoint and middleware.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

use super::handlers::{calendar_handler, health_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Calendar fragment (optionally trimmed via `?columns=`)
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: origins from configuration, GET only, all headers
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(calendar_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy from the configured origins.
///
/// A `"*"` entry (the default) allows any origin; otherwise only the
/// listed origins are allowed. Methods are limited to GET.
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
