//! Match operation error types.

use thiserror::Error;

use super::models::MatchId;
use crate::score::engine::EngineError;
use crate::sync::SyncError;

/// Errors on the match write path.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A scoring event or finish arrived after the match completed
    #[error("match closed: {0}")]
    MatchClosed(MatchId),

    /// The event is not applicable to the match's sport
    #[error(transparent)]
    InvalidEvent(#[from] EngineError),

    /// The persistence layer rejected the write or lost a race
    #[error(transparent)]
    Write(#[from] SyncError),
}

/// Result type for match operations.
pub type MatchResult<T> = Result<T, MatchError>;
