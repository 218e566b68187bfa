//! Snapshot serialization.
//!
//! [`SnapshotEncoder`] renders a sequence of records as
//!
//! ```text
//! {"sender":["s1","s2"],"message":["m1","m2"]}
//! ```
//!
//! # Encodings
//!
//! [`Encoding::Raw`] is the wire format existing clients expect: each field
//! is dropped between quotes byte-for-byte. A field containing `"` or `\`
//! therefore produces malformed JSON. [`Encoding::Escaped`] writes every
//! field as a proper JSON string literal instead; output only differs for
//! fields that need escaping.

use std::str::FromStr;

use serde::Deserialize;

use crate::config::ConfigError;
use crate::record::Record;

/// How string fields are written into the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Unescaped substitution of the raw field text.
    #[default]
    Raw,
    /// Standard JSON string escaping.
    Escaped,
}

impl FromStr for Encoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "escaped" => Ok(Self::Escaped),
            other => Err(ConfigError::Invalid(format!("unknown encoding: {other}"))),
        }
    }
}

/// Serializes live records into the parallel-array payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotEncoder {
    encoding: Encoding,
}

impl SnapshotEncoder {
    /// Create an encoder using the given [`Encoding`].
    pub const fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }

    /// The encoding this encoder writes.
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Encode `records` in iteration order.
    ///
    /// The iterator is walked twice (senders, then messages), so it must be
    /// cloneable; [`Snapshot`](crate::ring::Snapshot) and slice iterators are.
    pub fn encode<'a, I>(&self, records: I) -> String
    where
        I: IntoIterator<Item = &'a Record>,
        I::IntoIter: Clone,
    {
        let records = records.into_iter();

        let mut out = String::with_capacity(64);
        out.push_str("{\"sender\":[");
        self.push_array(&mut out, records.clone().map(Record::sender));
        out.push_str("],\"message\":[");
        self.push_array(&mut out, records.map(Record::message));
        out.push_str("]}");
        out
    }

    fn push_array<'a>(&self, out: &mut String, fields: impl Iterator<Item = &'a str>) {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                out.push(',');
            }
            match self.encoding {
                Encoding::Raw => {
                    out.push('"');
                    out.push_str(field);
                    out.push('"');
                }
                Encoding::Escaped => {
                    out.push_str(&serde_json::Value::from(field).to_string());
                }
            }
        }
    }
}
