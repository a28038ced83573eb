//! Read-only queries over the record store
//!
//! Every query keeps store order and carries the total of what it matched.
//! An empty result is a normal outcome, not an error.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::store::ExpenseStore;
use crate::validation::validate_date;

/// Expenses selected by a query, plus their summed amount
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub records: Vec<&'a Expense>,
    pub total: f64,
}

impl<'a> QueryResult<'a> {
    fn collect<I>(matches: I) -> Self
    where
        I: Iterator<Item = &'a Expense>,
    {
        let records: Vec<&Expense> = matches.collect();
        let total = records.iter().map(|e| e.amount.as_f64()).sum();
        Self { records, total }
    }

    /// Number of matching expenses
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids of the matches, in store order
    pub fn ids(&self) -> Vec<u32> {
        self.records.iter().map(|e| e.id.get()).collect()
    }
}

/// Every expense in the store
pub fn all(store: &ExpenseStore) -> QueryResult<'_> {
    QueryResult::collect(store.iter())
}

/// Expenses whose category equals `name`, ignoring ASCII case
pub fn by_category<'a>(store: &'a ExpenseStore, name: &str) -> QueryResult<'a> {
    QueryResult::collect(store.iter().filter(|e| e.in_category(name)))
}

/// Expenses dated between `start` and `end`, both inclusive
///
/// Both bounds must be well-formed dates. A start after the end is not an
/// error; it simply matches nothing.
pub fn by_date_range<'a>(
    store: &'a ExpenseStore,
    start: &str,
    end: &str,
) -> LedgerResult<QueryResult<'a>> {
    if !validate_date(start) {
        return Err(LedgerError::Validation(format!(
            "Invalid start date format: '{}'",
            start
        )));
    }
    if !validate_date(end) {
        return Err(LedgerError::Validation(format!(
            "Invalid end date format: '{}'",
            end
        )));
    }

    Ok(QueryResult::collect(store.iter().filter(|e| {
        e.date.as_str() >= start && e.date.as_str() <= end
    })))
}

/// Expenses whose description or category contains `term` (case-sensitive)
pub fn search<'a>(store: &'a ExpenseStore, term: &str) -> QueryResult<'a> {
    QueryResult::collect(store.iter().filter(|e| e.mentions(term)))
}
