//! Request DTOs for the commitscrape API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

use crate::error::{Result, ScrapeError};

/// Query parameters for the calendar endpoint (GET /)
///
/// # Fields
/// - `columns`: optional trailing-column count, must be in (0, 52]
/// - `user`: optional username to scrape instead of the configured default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarParams {
    /// Raw `columns` query value, validated by [`CalendarParams::columns`]
    #[serde(default)]
    pub columns: Option<String>,
    /// Requested username; empty means "use the configured default"
    #[serde(default)]
    pub user: Option<String>,
}

impl CalendarParams {
    /// Parses and bounds-checks the `columns` query.
    ///
    /// Absent or empty means no trimming. Anything that does not parse as
    /// an integer in (0, 52] is a client error.
    pub fn columns(&self) -> Result<Option<usize>> {
        match self.columns.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 && n <= 52 => Ok(Some(n)),
                _ => Err(ScrapeError::InvalidColumns),
            },
        }
    }

    /// The requested username, if a non-empty one was given.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref().filter(|user| !user.is_empty())
    }
}
