//! Payload pool indices

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the payload an iteration sends.
///
/// On the wire and in logs an index is a plain integer where `-1` means
/// "no pool identity, synthesize from randomness".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PayloadIndex {
    /// A pool slot; doubles as the generation seed
    Pooled(u64),
    /// No pooling
    Unpooled,
}

impl PayloadIndex {
    /// Integer form of [`PayloadIndex::Unpooled`]
    pub const SENTINEL: i64 = -1;

    pub fn pooled(&self) -> Option<u64> {
        match self {
            PayloadIndex::Pooled(slot) => Some(*slot),
            PayloadIndex::Unpooled => None,
        }
    }

    pub fn is_pooled(&self) -> bool {
        matches!(self, PayloadIndex::Pooled(_))
    }

    pub fn as_i64(&self) -> i64 {
        match self {
            PayloadIndex::Pooled(slot) => i64::try_from(*slot).unwrap_or(i64::MAX),
            PayloadIndex::Unpooled => Self::SENTINEL,
        }
    }
}

impl From<i64> for PayloadIndex {
    fn from(value: i64) -> Self {
        u64::try_from(value)
            .map(PayloadIndex::Pooled)
            .unwrap_or(PayloadIndex::Unpooled)
    }
}

impl From<u64> for PayloadIndex {
    fn from(value: u64) -> Self {
        PayloadIndex::Pooled(value)
    }
}

impl From<PayloadIndex> for i64 {
    fn from(index: PayloadIndex) -> Self {
        index.as_i64()
    }
}

impl fmt::Display for PayloadIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i64())
    }
}
