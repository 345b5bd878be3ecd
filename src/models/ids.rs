//! Transaction identifiers
//!
//! Ids are integers derived from the creation time in milliseconds. A
//! newtype keeps them from being confused with amounts or counts, and
//! `IdSequence` guarantees uniqueness even when two transactions are created
//! within the same millisecond.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Wrap a raw integer id
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the underlying integer
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Monotonic id issuer: `next = max(now_ms, last + 1)`
#[derive(Debug, Clone, Copy, Default)]
pub struct IdSequence {
    last: Option<i64>,
}

impl IdSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id that already exists (e.g. loaded from storage) so it is
    /// never issued again
    pub fn observe(&mut self, id: TransactionId) {
        self.last = Some(self.last.map_or(id.0, |last| last.max(id.0)));
    }

    /// Issue the next id for a transaction created at `now_ms`
    pub fn next_at(&mut self, now_ms: i64) -> TransactionId {
        let id = match self.last {
            Some(last) if last >= now_ms => last.saturating_add(1),
            _ => now_ms,
        };
        self.last = Some(id);
        TransactionId(id)
    }

    /// Issue the next id using the current wall clock
    pub fn next(&mut self) -> TransactionId {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }
}
