//! Bounded message records.
//!
//! A [`Record`] is one slot of the ring log. Both fields carry a byte
//! budget that is enforced every time the slot is written; anything past
//! the budget is dropped without an error.

/// Maximum number of bytes kept from a sender name.
pub const SENDER_MAX_BYTES: usize = 10;

/// Maximum number of bytes kept from a message body.
pub const MESSAGE_MAX_BYTES: usize = 150;

/// A single sender/message pair stored in the ring log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    sender: String,
    message: String,
}

impl Record {
    /// Build a record, truncating both fields to their byte budgets.
    pub fn new(sender: &str, message: &str) -> Self {
        let mut record = Self::default();
        record.assign(sender, message);
        record
    }

    /// The sender name (at most [`SENDER_MAX_BYTES`] bytes).
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// The message body (at most [`MESSAGE_MAX_BYTES`] bytes).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Overwrite this record in place, reusing its allocations.
    ///
    /// Returns `(sender_truncated, message_truncated)`.
    pub(crate) fn assign(&mut self, sender: &str, message: &str) -> (bool, bool) {
        let (sender, sender_truncated) = truncate_to(sender, SENDER_MAX_BYTES);
        let (message, message_truncated) = truncate_to(message, MESSAGE_MAX_BYTES);

        self.sender.clear();
        self.sender.push_str(sender);
        self.message.clear();
        self.message.push_str(message);

        (sender_truncated, message_truncated)
    }
}

/// Cut `input` down to at most `max_bytes` bytes.
///
/// The cut always lands on a UTF-8 character boundary, so a multi-byte
/// character straddling the limit is dropped whole. The flag reports
/// whether anything was removed.
pub fn truncate_to(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }

    let mut cut = max_bytes;
    while !input.is_char_boundary(cut) {
        cut = cut.saturating_sub(1);
    }

    (input.get(..cut).unwrap_or_default(), true)
}
