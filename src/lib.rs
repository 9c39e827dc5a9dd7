//! commitscrape - GitHub contribution calendar scraper
//!
//! Fetches a profile's contribution calendar, re-renders it as an
//! embeddable HTML fragment, and serves it over HTTP with TTL caching
//! and column trimming.

pub mod api;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod scrape;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweeper_task;
