//! TTL Cleanup Task
//!
//! Background task that periodically purges expired entries from a
//! [`MemoryStore`]. Redis expires keys itself and needs no sweeper.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::MemoryStore;

/// Spawns a background task that periodically purges expired entries.
///
/// Expired entries are already invisible to reads; the sweep only frees
/// their memory.
///
/// # Arguments
/// * `store` - store to sweep (clones share entries)
/// * `interval` - time between sweeps
///
/// # Returns
/// A JoinHandle the caller aborts on shutdown.
///
/// # Example
/// ```ignore
/// let store = MemoryStore::new();
/// let sweeper = spawn_cleanup_task(store.clone(), config.cleanup_period());
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_cleanup_task(store: MemoryStore, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.purge_expired().await;
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
