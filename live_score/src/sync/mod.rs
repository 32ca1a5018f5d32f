//! Match persistence and update fan-out.
//!
//! This module implements the synchronizer contract:
//! - A [`MatchStore`] trait over a document store with atomic, versioned
//!   field replacement
//! - An in-process [`InMemoryStore`] implementation
//! - A [`MatchSynchronizer`] that persists each update and pushes the new
//!   match to every active subscriber over a per-match broadcast channel
//!
//! Writes are conditional on the writer's expected version, so a racing
//! second organizer device gets a version conflict instead of silently
//! overwriting accepted events.

pub mod errors;
pub mod store;
pub mod synchronizer;

pub use errors::{SyncError, SyncResult};
pub use store::{InMemoryStore, MatchPatch, MatchStore};
pub use synchronizer::{DEFAULT_BROADCAST_CAPACITY, MatchSubscription, MatchSynchronizer};
