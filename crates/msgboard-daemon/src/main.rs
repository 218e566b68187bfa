//! Message board server binary.
//!
//! Wires the message log, the asset cache, and the HTTP server together
//! and serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `msgboard-config.yaml` (or `MSGBOARD_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Cache the static assets
//! 4. Create the message log, optionally seeded with demo messages
//! 5. Serve HTTP until `Ctrl-C`

mod error;

use std::path::PathBuf;
use std::sync::Arc;

use msgboard_core::{BoardConfig, RingLog, SnapshotEncoder};
use msgboard_server::{AppState, AssetCache, start_server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::DaemonError;

/// Config file used when `MSGBOARD_CONFIG` is not set.
const DEFAULT_CONFIG_PATH: &str = "msgboard-config.yaml";

/// Messages appended at startup when `board.seed_demo_messages` is set.
const DEMO_MESSAGES: [(&str, &str); 4] = [
    ("Allie", "Hello"),
    ("Bob", "Hi"),
    ("Colleen", "Hey"),
    ("Dave", "Hullooo"),
];

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any initialization step or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, config_found) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config file.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("msgboard starting");
    if !config_found {
        info!("Config file not found, using defaults");
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        assets_dir = %config.assets.dir.display(),
        capacity = config.board.capacity,
        encoding = ?config.board.encoding,
        "Configuration loaded"
    );

    run(config).await?;
    Ok(())
}

/// Build the shared state from `config` and serve until `Ctrl-C`.
async fn run(config: BoardConfig) -> Result<(), DaemonError> {
    // 3. Cache assets.
    let assets = AssetCache::load(&config.assets)?;

    // 4. Create the message log.
    let mut log = RingLog::with_capacity(config.board.capacity)?;
    if config.board.seed_demo_messages {
        seed_demo_messages(&mut log);
        info!(count = log.len(), "Demo messages seeded");
    }

    let state = Arc::new(AppState::new(
        log,
        SnapshotEncoder::new(config.board.encoding),
        assets,
    ));

    // 5. Serve.
    start_server(&config.server, state, shutdown_signal()).await?;
    Ok(())
}

/// Load `BoardConfig`, falling back to defaults when no file exists.
///
/// Returns the config and whether a file was read.
fn load_config() -> Result<(BoardConfig, bool), DaemonError> {
    let config_path = std::env::var("MSGBOARD_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    if config_path.exists() {
        Ok((BoardConfig::from_file(&config_path)?, true))
    } else {
        let mut config = BoardConfig::default();
        config.apply_env_overrides()?;
        Ok((config, false))
    }
}

fn seed_demo_messages(log: &mut RingLog) {
    for (sender, message) in DEMO_MESSAGES {
        log.append(sender, message);
    }
}

/// Resolve on `Ctrl-C`.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, shutting down");
    }
    info!("Shutdown signal received");
}
