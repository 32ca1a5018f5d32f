//! Match manager driving the scoring write path.

use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

use super::errors::{MatchError, MatchResult};
use super::models::{Match, MatchId, MatchStatus};
use crate::score::engine::{self, ScoreEvent};
use crate::score::models::{ScoreState, Sport};
use crate::sync::{MatchPatch, MatchSubscription, MatchSynchronizer};

/// Orchestrates the full write path for a match: engine transition, status
/// decision, versioned persistence, and fan-out to subscribers.
///
/// State application is synchronous from the caller's perspective; the
/// persistence write happens before the call returns and its failure is
/// surfaced, never dropped.
#[derive(Clone)]
pub struct MatchManager {
    sync: Arc<MatchSynchronizer>,
}

impl MatchManager {
    /// Create a match manager over the given synchronizer.
    #[must_use]
    pub fn new(sync: Arc<MatchSynchronizer>) -> Self {
        Self { sync }
    }

    /// Schedule a new match. It stays `Scheduled`, with no score data,
    /// until the first scoring event is accepted.
    pub async fn schedule_match(
        &self,
        sport: Sport,
        participant1_name: String,
        participant2_name: String,
        start_time: DateTime<Utc>,
    ) -> MatchResult<Match> {
        let m = Match::schedule(sport, participant1_name, participant2_name, start_time);
        self.sync.register(m.clone()).await?;
        info!(
            "scheduled {} match {}: {} vs {}",
            m.sport, m.id, m.participant1_name, m.participant2_name
        );
        Ok(m)
    }

    /// Apply a scoring event to a match.
    ///
    /// The first accepted event flips a `Scheduled` match to `Live`. Events
    /// against a `Completed` match are rejected with
    /// [`MatchError::MatchClosed`] and cause no state change. The write is
    /// conditional on the version read here, so a racing second scorer gets
    /// a version conflict instead of silently losing events.
    pub async fn record_event(&self, id: MatchId, event: ScoreEvent) -> MatchResult<Match> {
        let current = self.sync.get(id).await?;
        if !current.status.accepts_scoring() {
            return Err(MatchError::MatchClosed(id));
        }

        let state = current.score.clone().unwrap_or_else(|| {
            ScoreState::initial(
                current.sport,
                &current.participant1_name,
                &current.participant2_name,
            )
        });
        let next = engine::apply(&state, &event)?;

        let status = match current.status {
            MatchStatus::Scheduled => MatchStatus::Live,
            status => status,
        };
        let patch = MatchPatch {
            status: Some(status),
            score: Some(next),
            end_time: None,
        };
        let updated = self.sync.write(id, patch, current.version).await?;

        if current.status == MatchStatus::Scheduled {
            info!("match {id} is live");
        }
        Ok(updated)
    }

    /// Complete a match: terminal, stamps the end time, freezes the score.
    pub async fn finish_match(&self, id: MatchId) -> MatchResult<Match> {
        let current = self.sync.get(id).await?;
        if current.status == MatchStatus::Completed {
            return Err(MatchError::MatchClosed(id));
        }

        let patch = MatchPatch {
            status: Some(MatchStatus::Completed),
            score: None,
            end_time: Some(Utc::now()),
        };
        let updated = self.sync.write(id, patch, current.version).await?;
        info!("match {id} completed");
        Ok(updated)
    }

    /// Fetch the current match document.
    pub async fn get_match(&self, id: MatchId) -> MatchResult<Match> {
        Ok(self.sync.get(id).await?)
    }

    /// All matches, most recently scheduled first.
    pub async fn list_matches(&self) -> MatchResult<Vec<Match>> {
        Ok(self.sync.list().await?)
    }

    /// Subscribe to a match's updates: the current match immediately, then
    /// every subsequent accepted write.
    pub async fn subscribe(&self, id: MatchId) -> MatchResult<MatchSubscription> {
        Ok(self.sync.subscribe(id).await?)
    }
}
