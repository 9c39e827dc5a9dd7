//! Error types for the commitscrape service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Scrape Error Enum ==
/// Unified error type for the service.
///
/// Upstream fetch failures are deliberately absent: they degrade to an
/// empty fragment inside the orchestrator and never surface as errors.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// `columns` query unparseable or outside (0, 52]
    #[error("columns must be a number between 0 and 52")]
    InvalidColumns,

    /// `user` query not present in the configured allow-list
    #[error("unauthorized user")]
    UnauthorizedUser,

    /// A 200 upstream document without the calendar structure
    #[error("calendar markup missing from upstream document")]
    MalformedCalendar,

    /// The fragment store rejected a write
    #[error("store rejected write: {0}")]
    Store(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = match &self {
            ScrapeError::InvalidColumns | ScrapeError::UnauthorizedUser => {
                StatusCode::BAD_REQUEST
            }
            ScrapeError::MalformedCalendar | ScrapeError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, ScrapeError>;
