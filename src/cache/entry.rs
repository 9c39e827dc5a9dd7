//! Stored fragment entries with expiry metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Stored Fragment ==
/// A cached calendar fragment and its expiry window.
#[derive(Debug, Clone)]
pub struct StoredFragment {
    /// The assembled, untrimmed fragment markup
    pub html: String,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl StoredFragment {
    // == Constructor ==
    /// Creates an entry expiring `ttl_seconds` from now.
    ///
    /// Every stored fragment expires; there is no immortal entry.
    pub fn new(html: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            html,
            stored_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches `expires_at`.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
