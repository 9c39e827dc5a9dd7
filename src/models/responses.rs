//! Response DTOs for the commitscrape API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the calendar endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct CalendarResponse {
    /// The rendered (and possibly trimmed) calendar fragment
    pub html: String,
}

impl CalendarResponse {
    /// Creates a new CalendarResponse
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub err: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(err: impl Into<String>) -> Self {
        Self { err: err.into() }
    }
}
