//! Fixed-capacity circular message log.
//!
//! [`RingLog`] keeps `capacity` slots and two cursors. `head` points at the
//! oldest live record, `tail` at the slot the next append writes to. One
//! slot always stays unused so that `head == tail` can only mean "empty";
//! the log therefore holds at most `capacity - 1` live records.
//!
//! When an append would make `tail` catch up with `head`, `head` moves
//! forward too and the oldest record is dropped. Appends never fail.

use std::iter::FusedIterator;

use tracing::debug;

use crate::record::Record;

/// Number of slots in a default log (10 live records plus the divider).
pub const DEFAULT_CAPACITY: usize = 11;

/// Smallest usable capacity: one live slot plus the divider.
const MIN_CAPACITY: usize = 2;

/// Errors raised when constructing a [`RingLog`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingLogError {
    /// The requested capacity leaves no room for a live record.
    #[error("ring capacity must be at least 2, got {0}")]
    CapacityTooSmall(usize),
}

/// What happened during a single [`RingLog::append`].
///
/// Ignoring this value gives exactly the silent behavior of the log; it
/// exists so callers can log or count data loss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendOutcome {
    /// The sender was longer than its byte budget.
    pub sender_truncated: bool,
    /// The message was longer than its byte budget.
    pub message_truncated: bool,
    /// The oldest live record was discarded to make room.
    pub evicted: bool,
}

/// Circular buffer of [`Record`]s with overwrite-oldest semantics.
#[derive(Debug, Clone)]
pub struct RingLog {
    slots: Vec<Record>,
    head: usize,
    tail: usize,
}

impl RingLog {
    /// Create an empty log with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            slots: vec![Record::default(); DEFAULT_CAPACITY],
            head: 0,
            tail: 0,
        }
    }

    /// Create an empty log with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`RingLogError::CapacityTooSmall`] if `capacity < 2`.
    pub fn with_capacity(capacity: usize) -> Result<Self, RingLogError> {
        if capacity < MIN_CAPACITY {
            return Err(RingLogError::CapacityTooSmall(capacity));
        }
        Ok(Self {
            slots: vec![Record::default(); capacity],
            head: 0,
            tail: 0,
        })
    }

    /// Total number of slots, including the one kept free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Maximum number of live records the log can hold.
    pub fn max_live(&self) -> usize {
        self.capacity().saturating_sub(1)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        let capacity = self.capacity();
        self.tail
            .wrapping_add(capacity)
            .wrapping_sub(self.head)
            .checked_rem(capacity)
            .unwrap_or(0)
    }

    /// Whether the log holds no live records.
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Copy a sender/message pair into the log.
    ///
    /// Oversize fields are truncated and, if the log is already holding
    /// [`max_live`](Self::max_live) records, the oldest one is evicted.
    pub fn append(&mut self, sender: &str, message: &str) -> AppendOutcome {
        let mut outcome = AppendOutcome::default();

        if let Some(slot) = self.slots.get_mut(self.tail) {
            let (sender_truncated, message_truncated) = slot.assign(sender, message);
            outcome.sender_truncated = sender_truncated;
            outcome.message_truncated = message_truncated;
        }

        let capacity = self.capacity();
        self.tail = advance(self.tail, capacity);

        // overwrite older messages
        if self.tail == self.head {
            self.head = advance(self.head, capacity);
            outcome.evicted = true;
        }

        if outcome.sender_truncated || outcome.message_truncated || outcome.evicted {
            debug!(
                sender_truncated = outcome.sender_truncated,
                message_truncated = outcome.message_truncated,
                evicted = outcome.evicted,
                "append dropped data"
            );
        }

        outcome
    }

    /// Iterate over the live records, oldest first.
    ///
    /// The iterator borrows the log and can be cloned to walk the same
    /// records again.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            slots: &self.slots,
            cursor: self.head,
            tail: self.tail,
            remaining: self.len(),
        }
    }
}

impl Default for RingLog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RingLog {
    type Item = &'a Record;
    type IntoIter = Snapshot<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

/// Step an index forward by one slot, wrapping at `capacity`.
const fn advance(index: usize, capacity: usize) -> usize {
    let next = index.saturating_add(1);
    if next >= capacity { 0 } else { next }
}

/// Read-only, restartable view over the live records of a [`RingLog`].
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    slots: &'a [Record],
    cursor: usize,
    tail: usize,
    remaining: usize,
}

impl<'a> Iterator for Snapshot<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.tail {
            return None;
        }
        let record = self.slots.get(self.cursor)?;
        self.cursor = advance(self.cursor, self.slots.len());
        self.remaining = self.remaining.saturating_sub(1);
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Snapshot<'_> {}

impl FusedIterator for Snapshot<'_> {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    fn senders(log: &RingLog) -> Vec<&str> {
        log.snapshot().map(Record::sender).collect()
    }

    #[test]
    fn new_log_is_empty() {
        let log = RingLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.capacity(), DEFAULT_CAPACITY);
        assert_eq!(log.max_live(), 10);
        assert_eq!(log.snapshot().count(), 0);
    }

    #[test]
    fn rejects_capacity_without_live_slot() {
        assert_eq!(
            RingLog::with_capacity(1).unwrap_err(),
            RingLogError::CapacityTooSmall(1)
        );
        assert!(RingLog::with_capacity(0).is_err());
        assert!(RingLog::with_capacity(2).is_ok());
    }

    #[test]
    fn preserves_insertion_order_without_eviction() {
        let mut log = RingLog::new();
        for name in ["Allie", "Bob", "Colleen", "Dave"] {
            let outcome = log.append(name, "hi");
            assert!(!outcome.evicted);
        }
        assert_eq!(senders(&log), ["Allie", "Bob", "Colleen", "Dave"]);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn length_never_exceeds_max_live() {
        let mut log = RingLog::new();
        for n in 1..=40_usize {
            log.append(&format!("u{n}"), "m");
            assert_eq!(log.len(), n.min(log.max_live()));
            assert_eq!(log.snapshot().count(), log.len());
        }
    }

    #[test]
    fn wraparound_evicts_oldest_first() {
        let mut log = RingLog::new();
        let mut evictions = 0;
        for n in 1..=12 {
            if log.append(&format!("u{n}"), &format!("m{n}")).evicted {
                evictions += 1;
            }
        }
        assert_eq!(evictions, 2);

        let expected: Vec<String> = (3..=12).map(|n| format!("u{n}")).collect();
        assert_eq!(senders(&log), expected);

        let messages: Vec<&str> = log.snapshot().map(Record::message).collect();
        assert_eq!(messages.first().copied(), Some("m3"));
        assert_eq!(messages.last().copied(), Some("m12"));
    }

    #[test]
    fn fifo_eviction_over_many_laps() {
        let mut log = RingLog::with_capacity(4).unwrap();
        for n in 1..=23 {
            log.append(&format!("u{n}"), "");
        }
        // capacity 4 keeps the last 3: u21..u23
        assert_eq!(senders(&log), ["u21", "u22", "u23"]);
    }

    #[test]
    fn smallest_log_keeps_only_latest() {
        let mut log = RingLog::with_capacity(2).unwrap();
        assert!(!log.append("a", "1").evicted);
        assert!(log.append("b", "2").evicted);
        assert_eq!(senders(&log), ["b"]);
    }

    #[test]
    fn append_reports_truncation() {
        let mut log = RingLog::new();
        let outcome = log.append("12345678901", "x");
        assert!(outcome.sender_truncated);
        assert!(!outcome.message_truncated);
        assert_eq!(senders(&log), ["1234567890"]);
    }

    #[test]
    fn snapshot_is_restartable_and_exact_size() {
        let mut log = RingLog::new();
        log.append("a", "1");
        log.append("b", "2");

        let snapshot = log.snapshot();
        assert_eq!(snapshot.len(), 2);
        let first: Vec<_> = snapshot.clone().collect();
        let second: Vec<_> = snapshot.collect();
        assert_eq!(first, second);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn borrowed_log_iterates_like_snapshot() {
        let mut log = RingLog::new();
        log.append("a", "1");
        let via_ref: Vec<&str> = (&log).into_iter().map(Record::message).collect();
        assert_eq!(via_ref, ["1"]);
    }
}
