//! Strongly-typed ID wrapper for ledger entries
//!
//! Entry ids are small positive integers handed out by the store in increasing
//! order, which keeps them easy to type on the command line. Wrapping them in a
//! newtype keeps them from being mixed up with counts or indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Display prefix used when printing an id (`#12`)
const DISPLAY_PREFIX: &str = "#";

/// Identifier of a single ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// The first id handed out by an empty store
    pub const FIRST: EntryId = EntryId(1);

    /// Create an id from a raw number
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying number
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` once the id space is used up
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, self.0)
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    /// Parses both the bare number (`12`) and the display form (`#12`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(EntryId::new(12).to_string(), "#12");
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("12".parse::<EntryId>().unwrap(), EntryId::new(12));
        assert_eq!("#12".parse::<EntryId>().unwrap(), EntryId::new(12));
        assert!("twelve".parse::<EntryId>().is_err());
        assert!("-1".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_next() {
        assert_eq!(EntryId::FIRST.next(), Some(EntryId::new(2)));
        assert_eq!(EntryId::new(u64::MAX).next(), None);
    }

    #[test]
    fn test_id_serialization() {
        let id = EntryId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let deserialized: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
