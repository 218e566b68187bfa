//! Error types for the message board binary.
//!
//! [`DaemonError`] is the top-level error type that wraps every failure
//! mode during startup and serving.

/// Top-level error for the message board binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: msgboard_core::ConfigError,
    },

    /// The configured ring capacity is unusable.
    #[error("board error: {source}")]
    Board {
        /// The underlying ring log error.
        #[from]
        source: msgboard_core::RingLogError,
    },

    /// Static assets could not be cached.
    #[error("asset error: {source}")]
    Assets {
        /// The underlying asset error.
        #[from]
        source: msgboard_server::AssetError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: msgboard_server::ServerError,
    },
}
