//! Document store contract and the in-process implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::errors::{SyncError, SyncResult};
use crate::matches::{Match, MatchId, MatchStatus};
use crate::score::models::ScoreState;

/// Partial update applied to a match document as a single atomic
/// replacement of the named fields. Fields left `None` keep their
/// stored value.
#[derive(Clone, Debug, Default)]
pub struct MatchPatch {
    pub status: Option<MatchStatus>,
    pub score: Option<ScoreState>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Storage contract for match documents.
///
/// `write` is conditional: the caller states the version it read, and the
/// store rejects the write if another writer got there first. The store
/// bumps the version on every accepted write.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Store a newly scheduled match.
    async fn insert(&self, m: Match) -> SyncResult<()>;

    /// Fetch a match by id.
    async fn get(&self, id: MatchId) -> SyncResult<Match>;

    /// All stored matches, most recently scheduled first.
    async fn list(&self) -> SyncResult<Vec<Match>>;

    /// Atomically replace the patched fields, conditional on
    /// `expected_version`, and return the updated match.
    async fn write(&self, id: MatchId, patch: MatchPatch, expected_version: u64)
        -> SyncResult<Match>;
}

/// In-process match store backed by a `HashMap`.
#[derive(Default)]
pub struct InMemoryStore {
    matches: RwLock<HashMap<MatchId, Match>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchStore for InMemoryStore {
    async fn insert(&self, m: Match) -> SyncResult<()> {
        let mut matches = self.matches.write().await;
        if matches.contains_key(&m.id) {
            return Err(SyncError::AlreadyExists(m.id));
        }
        matches.insert(m.id, m);
        Ok(())
    }

    async fn get(&self, id: MatchId) -> SyncResult<Match> {
        let matches = self.matches.read().await;
        matches.get(&id).cloned().ok_or(SyncError::NotFound(id))
    }

    async fn list(&self) -> SyncResult<Vec<Match>> {
        let matches = self.matches.read().await;
        let mut all: Vec<Match> = matches.values().cloned().collect();
        all.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(all)
    }

    async fn write(
        &self,
        id: MatchId,
        patch: MatchPatch,
        expected_version: u64,
    ) -> SyncResult<Match> {
        let mut matches = self.matches.write().await;
        let m = matches.get_mut(&id).ok_or(SyncError::NotFound(id))?;

        if m.version != expected_version {
            return Err(SyncError::VersionConflict {
                expected: expected_version,
                actual: m.version,
            });
        }

        if let Some(status) = patch.status {
            m.status = status;
        }
        if let Some(score) = patch.score {
            m.score = Some(score);
        }
        if let Some(end_time) = patch.end_time {
            m.end_time = Some(end_time);
        }
        m.version += 1;

        Ok(m.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::models::{CricketScore, Sport};

    fn scheduled_match() -> Match {
        Match::schedule(
            Sport::Cricket,
            "Strikers".to_string(),
            "Chargers".to_string(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = InMemoryStore::new();
        let m = scheduled_match();
        store.insert(m.clone()).await.unwrap();

        let stored = store.get(m.id).await.unwrap();
        assert_eq!(stored.id, m.id);
        assert_eq!(stored.status, MatchStatus::Scheduled);
        assert_eq!(stored.version, 0);
    }

    #[tokio::test]
    async fn test_double_insert_is_rejected() {
        let store = InMemoryStore::new();
        let m = scheduled_match();
        store.insert(m.clone()).await.unwrap();
        assert!(matches!(
            store.insert(m).await,
            Err(SyncError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_write_bumps_version_and_replaces_fields() {
        let store = InMemoryStore::new();
        let m = scheduled_match();
        store.insert(m.clone()).await.unwrap();

        let patch = MatchPatch {
            status: Some(MatchStatus::Live),
            score: Some(ScoreState::Cricket(CricketScore {
                runs: 4,
                legal_balls: 1,
                ..CricketScore::default()
            })),
            end_time: None,
        };
        let updated = store.write(m.id, patch, 0).await.unwrap();
        assert_eq!(updated.status, MatchStatus::Live);
        assert_eq!(updated.version, 1);
        assert!(updated.score.is_some());
        assert!(updated.end_time.is_none());
    }

    #[tokio::test]
    async fn test_stale_write_gets_version_conflict() {
        let store = InMemoryStore::new();
        let m = scheduled_match();
        store.insert(m.clone()).await.unwrap();

        let patch = MatchPatch {
            status: Some(MatchStatus::Live),
            ..MatchPatch::default()
        };
        store.write(m.id, patch.clone(), 0).await.unwrap();

        // Second writer read version 0 but the store has moved on.
        let err = store.write(m.id, patch, 0).await.unwrap_err();
        assert!(matches!(
            err,
            SyncError::VersionConflict {
                expected: 0,
                actual: 1
            }
        ));
    }

    #[tokio::test]
    async fn test_write_to_unknown_match_is_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .write(uuid::Uuid::new_v4(), MatchPatch::default(), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::NotFound(_)));
    }
}
