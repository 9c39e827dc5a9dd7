//! Configuration Module
//!
//! Loads service settings from an optional `config.toml`, falling back to
//! built-in defaults when the file is missing or unreadable.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Service configuration.
///
/// Loaded once at startup and passed by injection; never reloaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// Profile scraped when no `user` query is given
    pub username: String,
    /// CORS origins; `"*"` allows any
    pub allowed_origins: Vec<String>,
    /// Pipe-delimited usernames queryable via `?user=`, e.g. `"|a|b|"`
    pub allowed_users: String,
    /// Cache expiry in seconds
    pub expire: u64,
    /// Base URL of the scraped profile host
    pub source_url: String,
    /// Interval between expired-entry sweeps, in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Loads configuration from `config.toml` in the working directory,
    /// or from the path named by `COMMITSCRAPE_CONFIG`.
    pub fn load() -> Self {
        let path = env::var("COMMITSCRAPE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::from_file(Path::new(&path))
    }

    /// Reads configuration from `path`.
    ///
    /// A missing or invalid file logs a warning and yields the defaults;
    /// configuration problems never stop the server from starting.
    pub fn from_file(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                warn!("no {} found, using defaults", path.display());
                return Self::default();
            }
        };

        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("invalid {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolves the identity to scrape: the requested user when one was
    /// given, otherwise the configured default.
    pub fn resolve_user<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(user) if !user.is_empty() => user,
            _ => &self.username,
        }
    }

    /// Membership check against the pipe-delimited allow-list.
    pub fn is_allowed_user(&self, user: &str) -> bool {
        !user.is_empty() && self.allowed_users.split('|').any(|allowed| allowed == user)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 7800,
            username: "mn6".to_string(),
            allowed_origins: vec!["*".to_string()],
            allowed_users: "|xaanit|mn6|".to_string(),
            expire: 43200,
            source_url: "https://github.com".to_string(),
            sweep_interval: 60,
        }
    }
}
