//! Expense model
//!
//! A single ledger entry plus the input shapes used to create and edit one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;
use crate::validation::clamp_text;

/// Length of a `YYYY-MM-DD` date
pub const DATE_LEN: usize = 10;

/// Maximum category length in bytes
pub const CATEGORY_MAX_BYTES: usize = 49;

/// Maximum description length in bytes
pub const DESCRIPTION_MAX_BYTES: usize = 99;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the store
    pub id: ExpenseId,

    /// Date as `YYYY-MM-DD`
    pub date: String,

    /// Amount spent, always greater than zero
    pub amount: Amount,

    /// Free-text category, grouped case-insensitively
    pub category: String,

    /// Free-text note
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Build an expense from a validated draft
    pub(crate) fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            date: draft.date,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
        }
    }

    /// Case-insensitive (ASCII) category comparison
    pub fn in_category(&self, name: &str) -> bool {
        self.category.eq_ignore_ascii_case(name)
    }

    /// Case-sensitive substring match on description or category
    pub fn mentions(&self, term: &str) -> bool {
        self.description.contains(term) || self.category.contains(term)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} {} {}", self.id, self.date, self.category, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// A candidate expense waiting for an id
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub date: String,
    pub amount: Amount,
    pub category: String,
    pub description: String,
}

impl ExpenseDraft {
    /// Create a draft, clamping text fields to their stored widths
    pub fn new(
        date: impl Into<String>,
        amount: Amount,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: clamp_text(&category.into(), CATEGORY_MAX_BYTES),
            description: clamp_text(&description.into(), DESCRIPTION_MAX_BYTES),
        }
    }
}

/// Raw replacement values for an existing expense
///
/// `None` and empty strings both mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpensePatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the date
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Replace the amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Replace the category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fields of an expense, used to report what an update touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Date,
    Amount,
    Category,
    Description,
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
            Self::Category => write!(f, "category"),
            Self::Description => write!(f, "description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::from_draft(
            ExpenseId::new(1),
            ExpenseDraft::new("2024-01-15", Amount::new(12.5), "Food", "Lunch at cafe"),
        )
    }

    #[test]
    fn test_category_match_ignores_ascii_case() {
        let expense = sample();
        assert!(expense.in_category("food"));
        assert!(expense.in_category("FOOD"));
        assert!(!expense.in_category("foo"));
    }

    #[test]
    fn test_mentions_is_case_sensitive() {
        let expense = sample();
        assert!(expense.mentions("cafe"));
        assert!(expense.mentions("Foo"));
        assert!(!expense.mentions("CAFE"));
        assert!(expense.mentions(""));
    }

    #[test]
    fn test_draft_clamps_long_text() {
        let draft = ExpenseDraft::new("2024-01-15", Amount::new(1.0), "c".repeat(80), "d".repeat(150));
        assert_eq!(draft.category.len(), CATEGORY_MAX_BYTES);
        assert_eq!(draft.description.len(), DESCRIPTION_MAX_BYTES);
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "#1 2024-01-15 Food 12.50 (Lunch at cafe)");
    }

    #[test]
    fn test_serialization() {
        let expense = sample();
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
        assert!(json.contains("\"id\":1"));
    }
}
