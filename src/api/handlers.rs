//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::FragmentCache;
use crate::config::Config;
use crate::error::{Result, ScrapeError};
use crate::models::{CalendarParams, CalendarResponse, HealthResponse};
use crate::scrape::CalendarScraper;

/// Application state shared across all handlers.
///
/// Holds the configuration, the fragment cache, and the scraper (which
/// owns the shared outbound client). Constructed once at startup and
/// injected everywhere; there are no ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: FragmentCache,
    pub scraper: CalendarScraper,
}

impl AppState {
    /// Creates application state from configuration.
    pub fn from_config(config: Config) -> Self {
        let config = Arc::new(config);
        let cache = FragmentCache::new(config.expire);
        let scraper = CalendarScraper::new(config.clone(), cache.clone());

        Self {
            config,
            cache,
            scraper,
        }
    }
}

/// Handler for GET /
///
/// Validates the query, authorizes the requested user against the
/// allow-list, and hands off to the scraper. Validation failures are
/// rejected before any fetch happens.
pub async fn calendar_handler(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Result<Json<CalendarResponse>> {
    let columns = params.columns()?;

    if let Some(user) = params.user() {
        if !state.config.is_allowed_user(user) {
            return Err(ScrapeError::UnauthorizedUser);
        }
    }

    let html = state.scraper.calendar(params.user(), columns).await?;

    Ok(Json(CalendarResponse::new(html)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
