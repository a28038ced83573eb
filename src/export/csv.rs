//! CSV Export functionality
//!
//! One row per expense, in ledger order.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::store::ExpenseStore;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(store: &ExpenseStore, writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Amount", "Category", "Description"])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in store {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.clone(),
                expense.amount.to_string(),
                expense.category.clone(),
                expense.description.clone(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
