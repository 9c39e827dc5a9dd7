//! Fragment Sweeper Task
//!
//! Background task that periodically removes expired cached fragments.
//! Reads already treat expired entries as absent; the sweeper only keeps
//! the store from holding dead fragments between requests.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::FragmentStore;

/// Spawns a background task that periodically sweeps expired fragments.
///
/// # Arguments
/// * `store` - shared reference to the fragment store
/// * `sweep_interval_secs` - interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_sweeper_task(
    store: Arc<RwLock<FragmentStore>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting fragment sweeper with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store_guard = store.write().await;
                store_guard.sweep_expired()
            };

            if removed > 0 {
                info!("Fragment sweep: removed {} expired fragments", removed);
            } else {
                debug!("Fragment sweep: nothing expired");
            }
        }
    })
}
