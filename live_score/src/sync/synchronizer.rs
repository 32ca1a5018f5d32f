//! Persists match updates and fans them out to subscribers.

use log::warn;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::{RwLock, broadcast};

use super::errors::SyncResult;
use super::store::{InMemoryStore, MatchPatch, MatchStore};
use crate::matches::{Match, MatchId};

/// Default number of updates buffered per subscriber before a slow reader
/// starts losing intermediate states. A lagging subscriber skips to the
/// most recent update; it never blocks the write path.
pub const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// Persists `(status, score)` updates and pushes each updated match to
/// every active subscriber of that match.
///
/// Subscribers are independent read-only cursors; none can mutate through
/// this channel, and dropping a [`MatchSubscription`] is the only
/// cancellation primitive. It stops delivery but never cancels an
/// in-flight write.
pub struct MatchSynchronizer {
    store: Arc<dyn MatchStore>,
    channels: RwLock<HashMap<MatchId, broadcast::Sender<Match>>>,
    capacity: usize,
}

impl MatchSynchronizer {
    /// Create a synchronizer over the given store with the default
    /// per-subscriber buffer.
    #[must_use]
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self::with_capacity(store, DEFAULT_BROADCAST_CAPACITY)
    }

    /// Create a synchronizer buffering `capacity` updates per subscriber.
    ///
    /// `capacity` must be at least 1.
    #[must_use]
    pub fn with_capacity(store: Arc<dyn MatchStore>, capacity: usize) -> Self {
        Self {
            store,
            channels: RwLock::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Convenience constructor over an [`InMemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Store a newly scheduled match.
    pub async fn register(&self, m: Match) -> SyncResult<()> {
        self.store.insert(m).await
    }

    /// Fetch the current match document.
    pub async fn get(&self, id: MatchId) -> SyncResult<Match> {
        self.store.get(id).await
    }

    /// All stored matches, most recently scheduled first.
    pub async fn list(&self) -> SyncResult<Vec<Match>> {
        self.store.list().await
    }

    /// Persist a patch conditional on `expected_version`, then push the
    /// updated match to all subscribers. Fan-out failure is impossible
    /// here; a channel with no receivers simply drops the update.
    pub async fn write(
        &self,
        id: MatchId,
        patch: MatchPatch,
        expected_version: u64,
    ) -> SyncResult<Match> {
        let updated = self.store.write(id, patch, expected_version).await?;

        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(&id) {
            let _ = tx.send(updated.clone());
        }

        Ok(updated)
    }

    /// Subscribe to a match's updates.
    ///
    /// The subscription yields the current match immediately, then every
    /// subsequent accepted write, until dropped.
    pub async fn subscribe(&self, id: MatchId) -> SyncResult<MatchSubscription> {
        // Create the receiver before reading the snapshot, so a write
        // landing in between is buffered in the channel instead of lost.
        // Buffered updates the snapshot already reflects are dropped by
        // version when the subscription is read.
        let rx = {
            let mut channels = self.channels.write().await;
            channels
                .entry(id)
                .or_insert_with(|| broadcast::channel(self.capacity).0)
                .subscribe()
        };
        let snapshot = match self.store.get(id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // Unknown match: drop the channel entry again unless other
                // subscribers arrived in the meantime.
                drop(rx);
                let mut channels = self.channels.write().await;
                if channels.get(&id).is_some_and(|tx| tx.receiver_count() == 0) {
                    channels.remove(&id);
                }
                return Err(e);
            }
        };

        Ok(MatchSubscription {
            match_id: id,
            seen_version: snapshot.version,
            pending: Some(snapshot),
            rx,
        })
    }
}

/// A read-only cursor over one match's updates.
pub struct MatchSubscription {
    match_id: MatchId,
    seen_version: u64,
    pending: Option<Match>,
    rx: broadcast::Receiver<Match>,
}

impl MatchSubscription {
    /// The match this subscription follows.
    #[must_use]
    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    /// The next match state: the snapshot taken at subscription time first,
    /// then each subsequent update. Returns `None` once the synchronizer is
    /// gone and all buffered updates are drained.
    pub async fn next(&mut self) -> Option<Match> {
        if let Some(snapshot) = self.pending.take() {
            return Some(snapshot);
        }
        loop {
            match self.rx.recv().await {
                // An update already covered by the snapshot is a duplicate
                // from a write racing the subscription; drop it.
                Ok(m) if m.version <= self.seen_version => {}
                Ok(m) => {
                    self.seen_version = m.version;
                    return Some(m);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Only the most recent accepted write matters to a viewer.
                    warn!(
                        "subscriber for match {} lagged, skipped {} updates",
                        self.match_id, skipped
                    );
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
