//! Strongly-typed transaction identifier
//!
//! Ids are sequential integers handed out by the store, so the wrapper keeps
//! them from being mixed up with counts or indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a transaction, unique within one store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// The first id assigned by an empty store
    pub const FIRST: TransactionId = TransactionId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying integer
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, or None once ids are exhausted
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for TransactionId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TransactionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(TransactionId::new(42).to_string(), "42");
    }

    #[test]
    fn test_parse() {
        let id: TransactionId = "17".parse().unwrap();
        assert_eq!(id.value(), 17);
        assert!("-1".parse::<TransactionId>().is_err());
        assert!("abc".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_next() {
        assert_eq!(TransactionId::FIRST.next(), Some(TransactionId::new(2)));
        assert_eq!(TransactionId::new(u64::MAX).next(), None);
    }
}
