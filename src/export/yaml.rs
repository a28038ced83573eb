//! YAML Export functionality
//!
//! Exports the whole ledger to YAML for human-readable backup.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::store::ExpenseStore;

/// Export the ledger to YAML
pub fn export_yaml<W: Write>(store: &ExpenseStore, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store);

    writeln!(writer, "# Expense ledger export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
