//! Statistics report
//!
//! Totals, averages, per-category breakdown and extremes over the store.

use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::store::ExpenseStore;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// Category as first seen in the store
    pub label: String,
    /// Summed amount
    pub total: f64,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of all spending, 0-100
    pub percentage: f64,
}

/// Highest and lowest expenses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes<'a> {
    pub highest: &'a Expense,
    pub lowest: &'a Expense,
}

/// Sum of every amount; zero for an empty store
pub fn total(store: &ExpenseStore) -> f64 {
    store.iter().map(|e| e.amount.as_f64()).sum()
}

/// Mean amount
///
/// # Errors
///
/// Returns a not-found error when the store is empty.
pub fn average(store: &ExpenseStore) -> LedgerResult<f64> {
    if store.is_empty() {
        return Err(LedgerError::NotFound {
            entity_type: "Expenses",
            identifier: "average of an empty ledger".to_string(),
        });
    }
    Ok(total(store) / store.len() as f64)
}

/// Per-category totals in order of first appearance
///
/// Categories are grouped ignoring ASCII case; the first spelling seen is
/// the label.
pub fn category_breakdown(store: &ExpenseStore) -> Vec<CategoryTotal> {
    let grand_total = total(store);
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CategoryTotal> = Vec::new();

    for expense in store {
        let key = expense.category.to_ascii_lowercase();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(CategoryTotal {
                label: expense.category.clone(),
                total: 0.0,
                count: 0,
                percentage: 0.0,
            });
            groups.len() - 1
        });
        groups[slot].total += expense.amount.as_f64();
        groups[slot].count += 1;
    }

    if grand_total > 0.0 {
        for group in &mut groups {
            group.percentage = group.total / grand_total * 100.0;
        }
    }

    groups
}

/// Highest and lowest expense, first occurrence winning ties
pub fn extremes(store: &ExpenseStore) -> Option<Extremes<'_>> {
    let mut iter = store.iter();
    let first = iter.next()?;

    let (highest, lowest) = iter.fold((first, first), |(high, low), expense| {
        let high = if expense.amount > high.amount { expense } else { high };
        let low = if expense.amount < low.amount { expense } else { low };
        (high, low)
    });

    Some(Extremes { highest, lowest })
}

/// Everything the statistics screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics<'a> {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    pub categories: Vec<CategoryTotal>,
    pub extremes: Extremes<'a>,
}

impl<'a> Statistics<'a> {
    /// Compute the full report, or `None` for an empty store
    pub fn compute(store: &'a ExpenseStore) -> Option<Self> {
        let extremes = extremes(store)?;
        let total = total(store);

        Some(Self {
            count: store.len(),
            total,
            average: total / store.len() as f64,
            categories: category_breakdown(store),
            extremes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseDraft};

    fn store(rows: &[(&str, f32)]) -> ExpenseStore {
        let mut store = ExpenseStore::new();
        for (category, amount) in rows {
            store
                .add(ExpenseDraft::new("2024-01-01", Amount::new(*amount), *category, ""))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_total_and_average() {
        let store = store(&[("A", 10.0), ("B", 20.0), ("C", 30.0)]);
        assert!((total(&store) - 60.0).abs() < 1e-9);
        assert!((average(&store).unwrap() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_store() {
        let store = ExpenseStore::new();
        assert_eq!(total(&store), 0.0);
        assert!(average(&store).unwrap_err().is_not_found());
        assert!(category_breakdown(&store).is_empty());
        assert!(extremes(&store).is_none());
        assert!(Statistics::compute(&store).is_none());
    }

    #[test]
    fn test_breakdown_groups_case_insensitively_in_first_seen_order() {
        let store = store(&[("Food", 10.0), ("food", 5.0), ("Transport", 20.0)]);
        let breakdown = category_breakdown(&store);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].label, "Food");
        assert!((breakdown[0].total - 15.0).abs() < 1e-9);
        assert_eq!(breakdown[0].count, 2);
        assert!((breakdown[0].percentage - 42.857).abs() < 0.01);
        assert_eq!(breakdown[1].label, "Transport");
        assert!((breakdown[1].percentage - 57.143).abs() < 0.01);
    }

    #[test]
    fn test_extremes_keep_first_on_ties() {
        let store = store(&[("a", 5.0), ("b", 20.0), ("c", 20.0), ("d", 3.0)]);
        let extremes = extremes(&store).unwrap();

        assert_eq!(extremes.highest.id.get(), 2);
        assert_eq!(extremes.lowest.id.get(), 4);
    }

    #[test]
    fn test_extremes_single_record() {
        let store = store(&[("only", 7.0)]);
        let extremes = extremes(&store).unwrap();
        assert_eq!(extremes.highest.id, extremes.lowest.id);
    }

    #[test]
    fn test_compute_bundles_everything() {
        let store = store(&[("Food", 10.0), ("Rent", 30.0)]);
        let stats = Statistics::compute(&store).unwrap();

        assert_eq!(stats.count, 2);
        assert!((stats.total - 40.0).abs() < 1e-9);
        assert!((stats.average - 20.0).abs() < 1e-9);
        assert_eq!(stats.categories.len(), 2);
        assert_eq!(stats.extremes.highest.category, "Rent");
    }
}
