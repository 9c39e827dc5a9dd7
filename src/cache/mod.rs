//! Cache Module
//!
//! Fragment caching: a TTL store plus the user-keyed gateway in front of it.

mod entry;
mod store;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

// Re-export public types
pub use entry::StoredFragment;
pub use store::FragmentStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed fragment size in bytes
pub const MAX_FRAGMENT_SIZE: usize = 1024 * 1024; // 1 MB

/// Prefix for all derived store keys
pub const KEY_PREFIX: &str = "commitscrape:";

/// Derives the store key for a username.
pub fn cache_key(user: &str) -> String {
    format!("{}{}", KEY_PREFIX, user)
}

// == Fragment Cache ==
/// Shared gateway over the fragment store.
///
/// Handles key derivation and applies the configured expiry on every
/// write. Absence (miss or expired) is `None`, never an error; a rejected
/// write is logged and dropped so the already-computed fragment still
/// reaches the caller.
#[derive(Clone)]
pub struct FragmentCache {
    store: Arc<RwLock<FragmentStore>>,
    ttl_seconds: u64,
}

impl FragmentCache {
    /// Creates a gateway with the given entry expiry.
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(FragmentStore::new())),
            ttl_seconds,
        }
    }

    /// Looks up the cached fragment for a username.
    pub async fn get(&self, user: &str) -> Option<String> {
        let key = cache_key(user);
        let mut store = self.store.write().await;
        let hit = store.get(&key);

        debug!(user, hit = hit.is_some(), "cache lookup");
        hit
    }

    /// Stores a fragment for a username with the configured expiry.
    pub async fn set(&self, user: &str, html: &str) {
        let key = cache_key(user);
        let mut store = self.store.write().await;

        if let Err(e) = store.insert(key, html.to_string(), self.ttl_seconds) {
            warn!(user, error = %e, "failed to cache fragment");
        }
    }

    /// Handle to the underlying store, for the sweeper task.
    pub fn store(&self) -> Arc<RwLock<FragmentStore>> {
        self.store.clone()
    }
}
