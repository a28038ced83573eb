//! Statistics display formatting

use crate::reports::Statistics;

/// Format the statistics report for terminal display
pub fn format_statistics(stats: &Statistics<'_>, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Expense Statistics\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("Expenses:        {}\n", stats.count));
    output.push_str(&format!("Total Expenses:  {}{:.2}\n", currency, stats.total));
    output.push_str(&format!("Average Expense: {}{:.2}\n", currency, stats.average));

    output.push_str("\nCategory Breakdown:\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    for category in &stats.categories {
        output.push_str(&format!(
            "{:<20} {:>12} ({:>5.1}%)\n",
            category.label,
            format!("{}{:.2}", currency, category.total),
            category.percentage
        ));
    }

    let highest = stats.extremes.highest;
    let lowest = stats.extremes.lowest;
    output.push_str(&format!(
        "\nHighest Expense: {}{} ({} - {})\n",
        currency, highest.amount, highest.category, highest.description
    ));
    output.push_str(&format!(
        "Lowest Expense:  {}{} ({} - {})\n",
        currency, lowest.amount, lowest.category, lowest.description
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseDraft};
    use crate::store::ExpenseStore;

    #[test]
    fn test_format_statistics() {
        let mut store = ExpenseStore::new();
        for (category, amount) in [("Food", 10.0), ("food", 5.0), ("Transport", 20.0)] {
            store
                .add(ExpenseDraft::new("2024-01-01", Amount::new(amount), category, "x"))
                .unwrap();
        }
        let stats = Statistics::compute(&store).unwrap();
        let text = format_statistics(&stats, "$");

        assert!(text.contains("Total Expenses:  $35.00"));
        assert!(text.contains("Average Expense: $11.67"));
        assert!(text.contains("( 42.9%)"));
        assert!(text.contains("( 57.1%)"));
        assert!(text.contains("Highest Expense: $20.00 (Transport - x)"));
        assert!(text.contains("Lowest Expense:  $5.00 (food - x)"));
    }
}
