//! Synchronizer error types.

use crate::matches::MatchId;
use thiserror::Error;

/// Persistence and fan-out errors.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No match with this id exists in the store
    #[error("match not found: {0}")]
    NotFound(MatchId),

    /// A match with this id is already stored
    #[error("match already exists: {0}")]
    AlreadyExists(MatchId),

    /// Conditional write lost a race against another writer
    #[error("version conflict: expected {expected}, store has {actual}")]
    VersionConflict { expected: u64, actual: u64 },

    /// The store backend rejected the operation or was unreachable
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;
