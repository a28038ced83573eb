//! Core data models for the expense ledger

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::{Amount, AmountParseError};
pub use expense::{
    Expense, ExpenseDraft, ExpenseField, ExpensePatch, CATEGORY_MAX_BYTES, DATE_LEN,
    DESCRIPTION_MAX_BYTES,
};
pub use ids::ExpenseId;
