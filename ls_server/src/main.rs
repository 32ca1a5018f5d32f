//! Live score broadcast server.
//!
//! Serves the organizer write path over REST and fans live score updates
//! out to spectators over WebSocket.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use live_score::{InMemoryStore, MatchManager, MatchSynchronizer};
use pico_args::Arguments;

use ls_server::{api, config::ServerConfig, logging};

const HELP: &str = "\
Run a live score broadcast server

USAGE:
  ls_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:7070]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  SERVER_CHANNEL_CAPACITY  Updates buffered per subscriber [default: 64]
  RUST_LOG                 Log filter (e.g., info, ls_server=debug)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let config = ServerConfig::from_env(bind_override)?;

    logging::init();
    tracing::info!("Starting live score server at {}", config.bind);

    // One synchronizer backs both the write path and every subscriber.
    let sync = Arc::new(MatchSynchronizer::with_capacity(
        Arc::new(InMemoryStore::new()),
        config.channel_capacity,
    ));
    let manager = MatchManager::new(sync);

    let state = api::AppState { manager };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    tracing::info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    tracing::info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
