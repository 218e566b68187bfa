//! Core message log for the message board server.
//!
//! This crate holds everything that has real invariants:
//!
//! - [`record`] -- Bounded sender/message records and byte-budget truncation
//! - [`ring`] -- [`RingLog`], the fixed-capacity circular buffer that
//!   silently evicts its oldest record when full
//! - [`encode`] -- [`SnapshotEncoder`], which renders the live slice of a
//!   [`RingLog`] as two parallel JSON arrays
//! - [`config`] -- Typed configuration loaded from `msgboard-config.yaml`
//!
//! The HTTP layer lives in `msgboard-server`; it only ever hands this crate
//! two strings on "add" and asks for an encoded snapshot on "read".

pub mod config;
pub mod encode;
pub mod record;
pub mod ring;

pub use config::{AssetsConfig, BoardConfig, BoardSettings, ConfigError, LoggingConfig, ServerConfig};
pub use encode::{Encoding, SnapshotEncoder};
pub use record::{MESSAGE_MAX_BYTES, Record, SENDER_MAX_BYTES};
pub use ring::{AppendOutcome, DEFAULT_CAPACITY, RingLog, RingLogError, Snapshot};
