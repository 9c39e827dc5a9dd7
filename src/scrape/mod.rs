//! Scrape Orchestration Module
//!
//! Ties the pipeline together per request: resolve the identity, consult
//! the cache, fetch the profile document, extract and assemble the
//! fragment, persist it, and trim to the requested column count.

mod orchestrator;

pub use orchestrator::{CalendarScraper, FETCH_TIMEOUT};
