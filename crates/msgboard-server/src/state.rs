//! Shared application state for the message board server.
//!
//! [`AppState`] owns the message log, the encoder, and the cached assets.
//! The log sits behind a [`Mutex`] so that "append then encode" runs as
//! one step no matter how many requests are in flight.

use msgboard_core::{RingLog, SnapshotEncoder};
use tokio::sync::Mutex;
use tracing::debug;

use crate::assets::AssetCache;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug)]
pub struct AppState {
    /// The message log.
    log: Mutex<RingLog>,
    /// Snapshot serializer.
    encoder: SnapshotEncoder,
    /// Static files served by the asset routes.
    pub assets: AssetCache,
}

impl AppState {
    /// Create state around an existing log.
    pub fn new(log: RingLog, encoder: SnapshotEncoder, assets: AssetCache) -> Self {
        Self {
            log: Mutex::new(log),
            encoder,
            assets,
        }
    }

    /// Append a message and return the encoded snapshot that includes it.
    pub async fn post(&self, sender: &str, message: &str) -> String {
        let mut log = self.log.lock().await;
        let outcome = log.append(sender, message);
        debug!(live = log.len(), evicted = outcome.evicted, "message appended");
        self.encoder.encode(log.snapshot())
    }

    /// Encode the current snapshot.
    pub async fn render(&self) -> String {
        let log = self.log.lock().await;
        self.encoder.encode(log.snapshot())
    }

    /// Number of live messages.
    pub async fn message_count(&self) -> usize {
        self.log.lock().await.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RingLog::new(), SnapshotEncoder::default(), AssetCache::default())
    }
}
