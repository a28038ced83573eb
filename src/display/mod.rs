//! Display formatting for terminal output
//!
//! Renders ledger data as plain-text tables and summaries.

pub mod expense;
pub mod statistics;

pub use expense::{
    format_expense_details, format_expense_row, format_expense_table, format_query_result,
};
pub use statistics::format_statistics;
