//! Per-request scrape orchestration.

use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use tracing::{debug, info, warn};

use crate::cache::FragmentCache;
use crate::calendar::{assemble, extract_columns, trim_columns};
use crate::config::Config;
use crate::error::Result;

/// Bound on the outbound profile fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// == Calendar Scraper ==
/// Orchestrates cache lookup, fetch, extraction, assembly, and trimming.
///
/// Holds the shared outbound client; constructed once at startup and
/// cloned into handlers through the application state.
#[derive(Clone)]
pub struct CalendarScraper {
    config: Arc<Config>,
    cache: FragmentCache,
    http: reqwest::Client,
}

impl CalendarScraper {
    /// Creates a scraper with a client bounded by [`FETCH_TIMEOUT`].
    pub fn new(config: Arc<Config>, cache: FragmentCache) -> Self {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("failed to build outbound HTTP client");

        Self { config, cache, http }
    }

    /// Produces the calendar fragment for one request.
    ///
    /// The identity is resolved once (requested user, or the configured
    /// default) and used for lookup, fetch, and persistence alike. A
    /// requested trim is applied freshly to the cached untrimmed copy and
    /// never written back.
    pub async fn calendar(&self, user: Option<&str>, columns: Option<usize>) -> Result<String> {
        let user = self.config.resolve_user(user);

        let mut html = match self.cache.get(user).await {
            Some(cached) => cached,
            None => self.scrape(user).await?,
        };

        if let Some(keep) = columns {
            if !html.is_empty() {
                html = trim_columns(&html, keep);
            }
        }

        Ok(html)
    }

    /// Fetches and renders the calendar for `user`, persisting on success.
    ///
    /// Fetch failures (non-200, network error, timeout) degrade to an
    /// empty fragment without persisting anything; only a 200 document
    /// missing the calendar structure is an error.
    async fn scrape(&self, user: &str) -> Result<String> {
        let url = self.profile_url(user);
        debug!(user, %url, "cache miss, scraping");

        let document = match self.fetch(&url).await {
            Ok(document) => document,
            Err(e) => {
                warn!(user, %url, error = %e, "fetch failed, serving empty calendar");
                return Ok(String::new());
            }
        };

        let columns = extract_columns(&document)?;
        let fragment = assemble(&columns);
        info!(user, columns = columns.len(), "calendar scraped");

        self.cache.set(user, &fragment).await;
        Ok(fragment)
    }

    /// Single-attempt GET of the profile document. No retries.
    async fn fetch(&self, url: &str) -> anyhow::Result<String> {
        let response = self.http.get(url).send().await?;

        if response.status() != reqwest::StatusCode::OK {
            bail!("unexpected status {}", response.status());
        }

        Ok(response.text().await?)
    }

    /// Builds the contributions URL for a username.
    fn profile_url(&self, user: &str) -> String {
        format!(
            "{}/users/{}/contributions",
            self.config.source_url.trim_end_matches('/'),
            user
        )
    }
}
