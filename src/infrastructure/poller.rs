//! Store Directory Poller
//!
//! Periodically fetches the store collection from the backend and republishes
//! it as the local snapshot. The snapshot is a cache: it is fully replaced on
//! every successful poll, never patched. On failure the previous snapshot is
//! kept and the error is logged.

use crate::domain::entities::Store;
use crate::domain::ports::StoreApi;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Holds the store snapshot and refreshes it from the backend.
///
/// Refreshes can overlap (a manual refresh racing a timer tick); whichever
/// response resolves last wins the snapshot slot. Once the owning handle is
/// stopped, no response can write anymore: the cancellation flag is checked
/// under the write lock before every replace.
pub struct DirectoryPoller {
    api: Arc<dyn StoreApi>,
    snapshot: Arc<RwLock<Vec<Store>>>,
    /// Bumped on every successful replace
    generation: Arc<AtomicU64>,
    /// Set by PollerHandle::stop(); blocks all further snapshot writes
    cancelled: Arc<AtomicBool>,
}

impl DirectoryPoller {
    /// Create a poller with an empty snapshot.
    pub fn new(api: Arc<dyn StoreApi>) -> Self {
        Self {
            api,
            snapshot: Arc::new(RwLock::new(Vec::new())),
            generation: Arc::new(AtomicU64::new(0)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current snapshot (cloned).
    pub async fn snapshot(&self) -> Vec<Store> {
        self.snapshot.read().await.clone()
    }

    /// Generation counter; moves only on successful refresh.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether the poller has been torn down.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fetch the collection once and replace the snapshot.
    ///
    /// Keep-stale on failure: the previous snapshot stays in place and the
    /// generation does not advance. A response arriving after teardown is
    /// discarded without touching state.
    pub async fn refresh_now(&self) {
        match self.api.list_stores().await {
            Ok(stores) => {
                let count = stores.len();
                {
                    let mut guard = self.snapshot.write().await;
                    // Teardown may have happened while the request was in flight
                    if self.cancelled.load(Ordering::SeqCst) {
                        tracing::debug!("discarding poll response after teardown");
                        return;
                    }
                    *guard = stores;
                }
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::debug!("store sync ok, generation={} stores={}", generation, count);
            }
            Err(e) => {
                tracing::error!("store sync failed, keeping previous snapshot: {}", e);
            }
        }
    }

    /// Start the polling loop: one immediate refresh, then fixed-interval
    /// ticks for the lifetime of the returned handle.
    pub fn start(self: &Arc<Self>, interval: Duration) -> PollerHandle {
        let poller = self.clone();
        let cancelled = self.cancelled.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);

            loop {
                // First tick fires immediately
                ticker.tick().await;

                if poller.cancelled.load(Ordering::SeqCst) {
                    break;
                }

                poller.refresh_now().await;
            }
        });

        PollerHandle { cancelled, task }
    }
}

/// Owning handle for the polling task.
///
/// Dropping the handle without calling [`PollerHandle::stop`] leaves the task
/// running; teardown is explicit.
pub struct PollerHandle {
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Tear the poller down.
    ///
    /// The cancellation flag is set before the task is aborted, so even a
    /// response that is already resolving cannot mutate the snapshot
    /// afterwards.
    pub fn stop(self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.abort();
        tracing::info!("directory poller stopped");
    }

    /// Whether teardown has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
