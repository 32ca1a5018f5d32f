//! Match records, lifecycle status, and orchestration.
//!
//! A match is the unit of ownership for score state: it is created in the
//! `Scheduled` status, flips to `Live` on the first accepted scoring event,
//! and freezes permanently once `Completed`. The [`MatchManager`] drives
//! the full write path: organizer action, engine transition, status
//! decision, versioned persistence, and fan-out.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{MatchError, MatchResult};
pub use manager::MatchManager;
pub use models::{Match, MatchId, MatchStatus};
