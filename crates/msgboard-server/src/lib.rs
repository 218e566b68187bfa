//! HTTP server for the message board.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Cached static assets** (`/`, `/style1.css`, `/favicon.ico`) read
//!   once at startup by [`AssetCache`]
//! - **Message API** (`/messages`, `/new`) returning the encoded ring log
//!   snapshot as `text/plain`
//! - **Fallback** for every other path: status 299 with a short HTML note
//!
//! # Architecture
//!
//! The [`RingLog`](msgboard_core::RingLog) lives inside [`AppState`] behind
//! a mutex. Adding a message appends and encodes under a single lock
//! acquisition, so every response is a consistent snapshot even with many
//! worker threads serving requests.

pub mod assets;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use assets::{AssetCache, AssetError};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
