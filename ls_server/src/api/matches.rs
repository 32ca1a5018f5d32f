//! Match management API handlers.
//!
//! HTTP REST endpoints for the organizer write path:
//! - Scheduling matches
//! - Applying scoring events (flips a scheduled match live)
//! - Completing matches
//! - Reading match details with a display-ready score summary
//!
//! # Examples
//!
//! Schedule a match:
//! ```bash
//! curl -X POST http://localhost:7070/api/v1/matches \
//!   -H "Content-Type: application/json" \
//!   -d '{"sport": "cricket", "participant1_name": "Strikers", "participant2_name": "Chargers"}'
//! ```
//!
//! Score a boundary:
//! ```bash
//! curl -X POST http://localhost:7070/api/v1/matches/<id>/events \
//!   -H "Content-Type: application/json" \
//!   -d '{"type": "run", "runs": 4}'
//! ```

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use live_score::{
    CricketEvent, GenericEvent, Match, MatchError, MatchId, RacketEvent, ScoreEvent, ScoreState,
    Side, Sport, SyncError,
};
use serde::{Deserialize, Serialize};

use super::AppState;

/// Match representation served to clients, including the projected
/// display summary alongside the raw score state.
#[derive(Debug, Serialize)]
pub struct MatchView {
    pub id: MatchId,
    pub sport: Sport,
    pub status: String,
    pub participant1_name: String,
    pub participant2_name: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub summary: String,
    pub score: Option<ScoreState>,
    pub version: u64,
}

impl From<Match> for MatchView {
    fn from(m: Match) -> Self {
        let summary = m.summary();
        Self {
            id: m.id,
            sport: m.sport,
            status: m.status.as_str().to_string(),
            participant1_name: m.participant1_name,
            participant2_name: m.participant2_name,
            start_time: m.start_time,
            end_time: m.end_time,
            summary,
            score: m.score,
            version: m.version,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub sport: Sport,
    pub participant1_name: String,
    pub participant2_name: String,
    /// Defaults to now when omitted.
    pub start_time: Option<DateTime<Utc>>,
}

/// Scoring event payload from the organizer client.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoreEventPayload {
    Run {
        runs: u8,
    },
    Wicket,
    Wide {
        #[serde(default)]
        extra: u32,
    },
    NoBall {
        #[serde(default)]
        extra: u32,
    },
    Point {
        side: Side,
    },
    Adjust {
        side: Side,
        delta: i64,
    },
}

impl From<ScoreEventPayload> for ScoreEvent {
    fn from(payload: ScoreEventPayload) -> Self {
        match payload {
            ScoreEventPayload::Run { runs } => Self::Cricket(CricketEvent::Run(runs)),
            ScoreEventPayload::Wicket => Self::Cricket(CricketEvent::Wicket),
            ScoreEventPayload::Wide { extra } => Self::Cricket(CricketEvent::Wide { extra }),
            ScoreEventPayload::NoBall { extra } => Self::Cricket(CricketEvent::NoBall { extra }),
            ScoreEventPayload::Point { side } => Self::Racket(RacketEvent::Point(side)),
            ScoreEventPayload::Adjust { side, delta } => {
                Self::Generic(GenericEvent::Adjust { side, delta })
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn map_match_error(err: MatchError) -> ApiError {
    let status = match &err {
        MatchError::MatchClosed(_) => StatusCode::CONFLICT,
        MatchError::InvalidEvent(_) => StatusCode::UNPROCESSABLE_ENTITY,
        MatchError::Write(SyncError::NotFound(_)) => StatusCode::NOT_FOUND,
        MatchError::Write(SyncError::VersionConflict { .. }) => StatusCode::CONFLICT,
        MatchError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// List all matches, most recently scheduled first.
pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchView>>, ApiError> {
    let matches = state
        .manager
        .list_matches()
        .await
        .map_err(map_match_error)?;
    Ok(Json(matches.into_iter().map(MatchView::from).collect()))
}

/// Schedule a new match.
///
/// # Response
///
/// Returns `201 Created` with the match view; the match starts in the
/// `scheduled` status with no score data.
pub async fn create_match(
    State(state): State<AppState>,
    Json(request): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchView>), ApiError> {
    let start_time = request.start_time.unwrap_or_else(Utc::now);
    let m = state
        .manager
        .schedule_match(
            request.sport,
            request.participant1_name,
            request.participant2_name,
            start_time,
        )
        .await
        .map_err(map_match_error)?;
    Ok((StatusCode::CREATED, Json(MatchView::from(m))))
}

/// Get a match with its projected score summary.
///
/// # Errors
///
/// - `404 Not Found`: No match with this id
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<MatchId>,
) -> Result<Json<MatchView>, ApiError> {
    let m = state
        .manager
        .get_match(match_id)
        .await
        .map_err(map_match_error)?;
    Ok(Json(MatchView::from(m)))
}

/// Apply a scoring event to a match.
///
/// The first accepted event flips the match live.
///
/// # Errors
///
/// - `404 Not Found`: No match with this id
/// - `409 Conflict`: Match already completed, or a racing writer won
/// - `422 Unprocessable Entity`: Event not applicable to the match's sport
pub async fn record_event(
    State(state): State<AppState>,
    Path(match_id): Path<MatchId>,
    Json(payload): Json<ScoreEventPayload>,
) -> Result<Json<MatchView>, ApiError> {
    let m = state
        .manager
        .record_event(match_id, payload.into())
        .await
        .map_err(map_match_error)?;
    Ok(Json(MatchView::from(m)))
}

/// Complete a match. Terminal; stamps the end time and freezes the score.
///
/// # Errors
///
/// - `404 Not Found`: No match with this id
/// - `409 Conflict`: Match already completed
pub async fn finish_match(
    State(state): State<AppState>,
    Path(match_id): Path<MatchId>,
) -> Result<Json<MatchView>, ApiError> {
    let m = state
        .manager
        .finish_match(match_id)
        .await
        .map_err(map_match_error)?;
    Ok(Json(MatchView::from(m)))
}
