//! Hand-off of full synchronization requests to a background worker.
//!
//! Callers enqueue a request through [`SyncHandle`] and return at once.
//! The [`SyncWorker`] drains the queue and owns the error policy: failures
//! are logged and the worker moves on to the next request.

use crate::ports::{FullSync, SyncTrigger};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Errors reported by a sync transport.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("network error: {0}")]
    Network(String),

    #[error("sync rejected by server: {0}")]
    Rejected(String),
}

/// A queued full-sync request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncRequest {
    pub force_resync: bool,
}

/// Sending side of the sync queue. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SyncHandle {
    tx: mpsc::UnboundedSender<SyncRequest>,
}

impl SyncTrigger for SyncHandle {
    fn request_full_sync(&self, force_resync: bool) {
        if self.tx.send(SyncRequest { force_resync }).is_err() {
            tracing::warn!("Sync worker is gone, dropping full sync request");
        } else {
            tracing::info!("Queued full sync (force_resync={})", force_resync);
        }
    }
}

/// Receiving side of the sync queue.
pub struct SyncWorker {
    rx: mpsc::UnboundedReceiver<SyncRequest>,
    service: Arc<dyn FullSync>,
}

/// Create a connected handle/worker pair.
pub fn channel(service: Arc<dyn FullSync>) -> (SyncHandle, SyncWorker) {
    let (tx, rx) = mpsc::unbounded_channel();
    (SyncHandle { tx }, SyncWorker { rx, service })
}

impl SyncWorker {
    /// Process requests until every handle has been dropped.
    ///
    /// Returns the number of requests that completed successfully.
    pub async fn run(mut self) -> usize {
        let mut completed = 0;
        while let Some(request) = self.rx.recv().await {
            match self.service.full_sync(request.force_resync).await {
                Ok(()) => {
                    completed += 1;
                    tracing::info!("Full sync finished");
                }
                Err(e) => tracing::warn!("Full sync failed: {}", e),
            }
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FlakySync {
        calls: Mutex<Vec<bool>>,
    }

    #[async_trait]
    impl FullSync for FlakySync {
        async fn full_sync(&self, force_resync: bool) -> Result<(), SyncError> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(force_resync);
            if calls.len() == 1 {
                return Err(SyncError::Network("offline".into()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn worker_survives_failures_and_stops_when_handles_drop() {
        let service = Arc::new(FlakySync::default());
        let (handle, worker) = channel(service.clone());
        let task = tokio::spawn(worker.run());

        handle.request_full_sync(true);
        handle.request_full_sync(false);
        drop(handle);

        assert_eq!(task.await.unwrap(), 1);
        assert_eq!(*service.calls.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn request_after_worker_dropped_is_ignored() {
        let (handle, worker) = channel(Arc::new(FlakySync::default()));
        drop(worker);
        handle.request_full_sync(true);
    }
}
