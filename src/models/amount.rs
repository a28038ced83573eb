//! Amount type for expense values
//!
//! Amounts are single-precision floats because that is what the on-disk
//! record layout stores. Sums are accumulated in `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// A monetary amount as stored in an expense record
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f32);

impl Amount {
    /// Wrap a raw value
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Value widened for aggregation
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Check if the amount is a finite value greater than zero
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "12.5", " 12.50 ", "$12.50"
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let value: f32 = digits
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(trimmed.to_string()));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f32> for Amount {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|a| a.0).sum())
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        Self(iter.map(|a| a.0).sum())
    }
}

/// Errors from parsing an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no amount given"),
            Self::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!(Amount::parse("12.5").unwrap(), Amount::new(12.5));
        assert_eq!(Amount::parse(" 12.50 ").unwrap(), Amount::new(12.5));
        assert_eq!(Amount::parse("$3").unwrap(), Amount::new(3.0));
        assert_eq!(Amount::parse("-4").unwrap(), Amount::new(-4.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        assert!(matches!(
            Amount::parse("ten"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("inf").is_err());
    }

    #[test]
    fn test_is_positive() {
        assert!(Amount::new(0.01).is_positive());
        assert!(!Amount::new(0.0).is_positive());
        assert!(!Amount::new(-1.0).is_positive());
        assert!(!Amount::new(f32::INFINITY).is_positive());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Amount::new(5.0).to_string(), "5.00");
        assert_eq!(Amount::new(1234.567).to_string(), "1234.57");
    }

    #[test]
    fn test_sum() {
        let amounts = [Amount::new(1.5), Amount::new(2.5)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total, Amount::new(4.0));
    }
}
