//! Expense identifiers
//!
//! Ids are small positive integers assigned by the store, so the newtype
//! wraps a `u32` rather than a UUID. The ledger file stores them as `i32`,
//! which caps every id at [`ExpenseId::MAX`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// Largest id the ledger file can hold
    pub const MAX: Self = Self(i32::MAX as u32);

    /// Wrap a raw id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying number
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` past [`ExpenseId::MAX`]
    pub const fn checked_next(&self) -> Option<Self> {
        if self.0 >= Self::MAX.0 {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ExpenseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_prefixed() {
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert_eq!(" #7 ".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert!("seven".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_display_and_next() {
        let id = ExpenseId::new(9);
        assert_eq!(id.to_string(), "9");
        assert_eq!(id.checked_next(), Some(ExpenseId::new(10)));
    }

    #[test]
    fn test_next_stops_at_file_limit() {
        assert_eq!(ExpenseId::MAX.get(), i32::MAX as u32);
        assert_eq!(ExpenseId::MAX.checked_next(), None);
        assert_eq!(ExpenseId::new(u32::MAX).checked_next(), None);
        assert_eq!(
            ExpenseId::new(i32::MAX as u32 - 1).checked_next(),
            Some(ExpenseId::MAX)
        );
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:<5}|", ExpenseId::new(7)), "7    |");
        assert_eq!(format!("{:>4}", ExpenseId::new(42)), "  42");
    }
}
