//! WebSocket handler for real-time score updates.
//!
//! Spectators (and the organizer's own scoreboard) connect here to follow a
//! match. The connection is strictly read-only: the current match arrives
//! immediately after the upgrade, then every accepted score write, each
//! serialized with its display-ready summary. Disconnecting is the only
//! cancellation; it stops delivery and nothing else.
//!
//! # Example
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:7070/ws/<match_id>');
//! ws.onmessage = (event) => updateScoreboard(JSON.parse(event.data));
//! ```

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures_util::{SinkExt, StreamExt};
use live_score::{MatchError, MatchId, MatchSubscription, SyncError};
use log::{error, info};

use super::{AppState, matches::MatchView};

/// Upgrade HTTP connection to a WebSocket score subscription.
///
/// # Response
///
/// On success, upgrades the connection (101 Switching Protocols). If the
/// match does not exist, returns `404 Not Found` before upgrading.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Path(match_id): Path<MatchId>,
    State(state): State<AppState>,
) -> Response {
    let subscription = match state.manager.subscribe(match_id).await {
        Ok(subscription) => subscription,
        Err(MatchError::Write(SyncError::NotFound(_))) => {
            return (StatusCode::NOT_FOUND, "Match not found").into_response();
        }
        Err(e) => {
            error!("Failed to subscribe to match {match_id}: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Subscription failed").into_response();
        }
    };

    ws.on_upgrade(move |socket| handle_socket(socket, subscription))
}

/// Pump match updates to the client until either side disconnects.
///
/// Incoming client frames are drained but never interpreted; subscribers
/// have no mutation rights over this channel.
async fn handle_socket(socket: WebSocket, mut subscription: MatchSubscription) {
    let match_id = subscription.match_id();
    let (mut sender, mut receiver) = socket.split();

    info!("WebSocket connected: match={match_id}");

    loop {
        tokio::select! {
            update = subscription.next() => {
                let Some(m) = update else {
                    // Synchronizer gone; nothing more will arrive.
                    break;
                };
                let view = MatchView::from(m);
                let json = match serde_json::to_string(&view) {
                    Ok(json) => json,
                    Err(e) => {
                        error!("Failed to serialize match view: {e}");
                        continue;
                    }
                };
                if sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
            frame = receiver.next() => {
                match frame {
                    None | Some(Ok(Message::Close(_))) | Some(Err(_)) => break,
                    // Read-only channel: ignore anything else the client sends.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    info!("WebSocket disconnected: match={match_id}");
}
