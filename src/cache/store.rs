//! Fragment Store Module
//!
//! Per-key fragment storage with TTL expiry and size bounds.

use std::collections::HashMap;

use crate::cache::{StoredFragment, MAX_FRAGMENT_SIZE, MAX_KEY_LENGTH};
use crate::error::{Result, ScrapeError};

// == Fragment Store ==
/// Backing store for rendered fragments, one entry per derived key.
///
/// Expiry is enforced lazily on read and by the periodic sweeper; an
/// expired entry is indistinguishable from an absent one to callers.
#[derive(Debug, Default)]
pub struct FragmentStore {
    entries: HashMap<String, StoredFragment>,
}

impl FragmentStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Retrieves a fragment by key.
    ///
    /// Absence and expiry both come back as `None`; expired entries are
    /// dropped on the way out.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.html.clone()),
            None => None,
        }
    }

    // == Insert ==
    /// Stores a fragment under `key`, unconditionally overwriting any
    /// previous entry and resetting its expiry.
    pub fn insert(&mut self, key: String, html: String, ttl_seconds: u64) -> Result<()> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(ScrapeError::Store(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if html.len() > MAX_FRAGMENT_SIZE {
            return Err(ScrapeError::Store(format!(
                "fragment exceeds maximum size of {} bytes",
                MAX_FRAGMENT_SIZE
            )));
        }

        self.entries.insert(key, StoredFragment::new(html, ttl_seconds));
        Ok(())
    }

    // == Sweep Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
