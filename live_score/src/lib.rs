//! # Live Score
//!
//! A live match scoring engine for multi-sport tournaments.
//!
//! This library provides the core scoring logic for recording live scores
//! across heterogeneous sports and broadcasting the current score to any
//! number of read-only subscribers in near real time.
//!
//! ## Architecture
//!
//! Scoring is modeled as pure state transitions gated by a small match
//! lifecycle machine:
//!
//! - **Scheduled**: The match exists but no scoring event has been accepted
//! - **Live**: Entered automatically on the first accepted scoring event
//! - **Completed**: Entered by an explicit organizer action; terminal, the
//!   score is frozen and further events are rejected
//!
//! Each sport family has its own state shape and transition rules:
//!
//! - **Cricket**: Runs, wickets, and legal-ball accounting with wides and
//!   no-balls counted as extras outside the over
//! - **Racket**: Point/game/set progression with deuce-advantage logic
//! - **Generic**: A floor-clamped counter pair for sports without bespoke
//!   rules
//!
//! ## Core Modules
//!
//! - [`score`]: Score state models, the scoring engine, and viewer projection
//! - [`matches`]: Match records, lifecycle status, and the match manager
//! - [`sync`]: Persistence contract and per-match update fan-out
//!
//! ## Example
//!
//! ```
//! use live_score::{MatchManager, MatchSynchronizer, Sport, ScoreEvent, CricketEvent};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sync = Arc::new(MatchSynchronizer::in_memory());
//! let manager = MatchManager::new(sync);
//!
//! let m = manager
//!     .schedule_match(Sport::Cricket, "Strikers".into(), "Chargers".into(), chrono::Utc::now())
//!     .await?;
//!
//! // First accepted event flips the match live.
//! let m = manager
//!     .record_event(m.id, ScoreEvent::Cricket(CricketEvent::Run(4)))
//!     .await?;
//! println!("{}", m.summary());
//! # Ok(())
//! # }
//! ```

/// Score state models, scoring engine, and viewer projection.
pub mod score;
pub use score::{engine, models, projection};
pub use score::{
    engine::{CricketEvent, EngineError, GenericEvent, RacketEvent, ScoreEvent},
    models::{
        BallOutcome, CricketScore, GameScore, GenericScore, PointIndex, RacketScore, ScoreState,
        SetScore, Side, Sport,
    },
};

/// Match records, lifecycle status, and orchestration.
pub mod matches;
pub use matches::{Match, MatchError, MatchId, MatchManager, MatchResult, MatchStatus};

/// Persistence contract and per-match update fan-out.
pub mod sync;
pub use sync::{
    DEFAULT_BROADCAST_CAPACITY, InMemoryStore, MatchPatch, MatchStore, MatchSubscription,
    MatchSynchronizer, SyncError, SyncResult,
};
