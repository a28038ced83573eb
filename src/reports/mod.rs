//! Reports over the expense ledger
//!
//! Provides the filtered views (category, date range, search) and the
//! statistics summary.

pub mod query;
pub mod statistics;

pub use query::{by_category, by_date_range, search, QueryResult};
pub use statistics::{
    average, category_breakdown, extremes, total, CategoryTotal, Extremes, Statistics,
};
