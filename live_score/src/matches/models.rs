//! Match record and lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::score::models::{ScoreState, Sport};
use crate::score::projection;

/// Match ID type.
pub type MatchId = Uuid;

/// Match lifecycle status.
///
/// The lifecycle is strictly forward: `Scheduled -> Live -> Completed`.
/// `Live` is entered automatically by the first accepted scoring event;
/// `Completed` is entered by an explicit organizer action and is terminal.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Created, no scoring event accepted yet
    Scheduled,
    /// Scoring in progress
    Live,
    /// Finished; score state is frozen
    Completed,
}

impl MatchStatus {
    /// Wire/storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Completed => "completed",
        }
    }

    /// Whether scoring events are still accepted in this status.
    #[must_use]
    pub const fn accepts_scoring(&self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single contest between two participants.
///
/// The match exclusively owns its score state. `score` is absent until the
/// first accepted scoring event; `end_time` is absent until completion.
/// `version` increases by one on every accepted write and guards against
/// racing writers.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub sport: Sport,
    pub participant1_name: String,
    pub participant2_name: String,
    pub status: MatchStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub score: Option<ScoreState>,
    pub version: u64,
}

impl Match {
    /// Create a match in the `Scheduled` status with no score data.
    #[must_use]
    pub fn schedule(
        sport: Sport,
        participant1_name: String,
        participant2_name: String,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sport,
            participant1_name,
            participant2_name,
            status: MatchStatus::Scheduled,
            start_time,
            end_time: None,
            score: None,
            version: 0,
        }
    }

    /// Display-ready score summary for this match's sport.
    #[must_use]
    pub fn summary(&self) -> String {
        projection::project(self.sport, self.score.as_ref())
    }
}
