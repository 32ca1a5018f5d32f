//! Score state models, scoring engine, and viewer projection.
//!
//! This module provides the per-sport scoring implementation:
//! - Sport-specific state shapes with validation invariants
//! - Pure transition functions mapping (state, event) to a new state
//! - Display-ready projections used by organizer and spectator surfaces

pub mod engine;
pub mod models;
pub mod projection;

pub use engine::{CricketEvent, EngineError, EngineResult, GenericEvent, RacketEvent, ScoreEvent};
pub use models::{
    BallOutcome, CricketScore, GameScore, GenericScore, PointIndex, RacketScore, ScoreState,
    SetScore, Side, Sport,
};
pub use projection::project;
