//! Expense display formatting
//!
//! Table and detail views for terminal output.

use crate::models::Expense;
use crate::reports::QueryResult;

const RULE_WIDTH: usize = 79;

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{:<5} {:<12} {:>12} {:<20} {}",
        expense.id,
        expense.date,
        format!("{}{}", currency, expense.amount),
        truncate(&expense.category, 20),
        truncate(&expense.description, 30)
    )
}

/// Format expenses as a table with a total line
pub fn format_expense_table<'a, I>(expenses: I, total: f64, total_label: &str, currency: &str) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut output = String::new();
    output.push_str(&format!(
        "{:<5} {:<12} {:>12} {:<20} {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }

    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<18} {:>12}\n",
        total_label,
        format!("{}{:.2}", currency, total)
    ));
    output
}

/// Format a query result, or `empty_message` when nothing matched
pub fn format_query_result(
    result: &QueryResult<'_>,
    total_label: &str,
    empty_message: &str,
    currency: &str,
) -> String {
    if result.is_empty() {
        return format!("{}\n", empty_message);
    }
    format_expense_table(result.records.iter().copied(), result.total, total_label, currency)
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID:          {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date));
    output.push_str(&format!("Amount:      {}{}\n", currency, expense.amount));
    output.push_str(&format!("Category:    {}\n", expense.category));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseDraft};
    use crate::reports;
    use crate::store::ExpenseStore;

    fn store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store
            .add(ExpenseDraft::new("2024-01-01", Amount::new(12.5), "Food", "Lunch"))
            .unwrap();
        store
            .add(ExpenseDraft::new("2024-01-02", Amount::new(3.0), "Transport", "Bus"))
            .unwrap();
        store
    }

    #[test]
    fn test_row_contents() {
        let store = store();
        let row = format_expense_row(&store.all()[0], "$");
        // id column is five wide, then the date
        assert!(row.starts_with("1     2024-01-01"));
        assert!(row.contains("$12.50"));
        assert!(row.contains("Lunch"));
    }

    #[test]
    fn test_rows_align_under_header() {
        let store = store();
        let table = format_expense_table(store.iter(), 0.0, "TOTAL EXPENSES:", "$");
        let lines: Vec<&str> = table.lines().collect();

        let date_column = lines[0].find("Date").unwrap();
        assert_eq!(lines[2].find("2024-01-01"), Some(date_column));
    }

    #[test]
    fn test_table_total() {
        let store = store();
        let table = format_expense_table(store.iter(), 15.5, "TOTAL EXPENSES:", "$");
        assert!(table.contains("TOTAL EXPENSES:"));
        assert!(table.contains("$15.50"));
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn test_empty_query_message() {
        let store = store();
        let result = reports::by_category(&store, "Rent");
        let text = format_query_result(&result, "CATEGORY TOTAL:", "No expenses found", "$");
        assert_eq!(text, "No expenses found\n");
    }

    #[test]
    fn test_details() {
        let store = store();
        let text = format_expense_details(&store.all()[1], "€");
        assert!(text.contains("Amount:      €3.00"));
        assert!(text.contains("Description: Bus"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 5), "abcd…");
    }
}
