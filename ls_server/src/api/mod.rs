//! HTTP/WebSocket API for the live score server.
//!
//! The API splits into the organizer write path (REST) and the spectator
//! read path (WebSocket fan-out):
//!
//! - [`matches`]: Match scheduling, scoring events, and completion
//! - [`websocket`]: Real-time score updates pushed to subscribers
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                         - Health check
//! GET  /api/v1/matches                 - List matches
//! POST /api/v1/matches                 - Schedule a match
//! GET  /api/v1/matches/{id}            - Match details with score summary
//! POST /api/v1/matches/{id}/events     - Apply a scoring event
//! POST /api/v1/matches/{id}/finish     - Complete the match
//! GET  /ws/{match_id}                  - WebSocket score subscription
//! ```
//!
//! Authentication and access control are out of scope here; the server
//! assumes an already-identified organizer on the write path.

pub mod matches;
pub mod websocket;

use axum::{
    Router,
    response::Json,
    routing::{get, post},
};
use live_score::MatchManager;
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers and WebSocket
/// connections. Cloned per request; cheap, the manager is an `Arc` wrapper.
#[derive(Clone)]
pub struct AppState {
    pub manager: MatchManager,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route(
            "/matches",
            get(matches::list_matches).post(matches::create_match),
        )
        .route("/matches/{match_id}", get(matches::get_match))
        .route("/matches/{match_id}/events", post(matches::record_event))
        .route("/matches/{match_id}/finish", post(matches::finish_match));

    Router::new()
        .route("/health", get(health_check))
        .route("/ws/{match_id}", get(websocket::websocket_handler))
        .nest("/api/v1", v1_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
