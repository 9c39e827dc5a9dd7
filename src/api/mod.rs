//! API Module
//!
//! HTTP handlers and routing for the commitscrape API.
//!
//! # Endpoints
//! - `GET /` - Scrape (or serve cached) calendar fragment, optionally trimmed
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
