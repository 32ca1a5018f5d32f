//! Live score broadcast server.
//!
//! Exposes the organizer write path over REST and the spectator read path
//! over WebSocket, backed by the `live_score` scoring core.

pub mod api;
pub mod config;
pub mod logging;
