//! JSON Export functionality
//!
//! Exports the whole ledger to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::reports;
use crate::store::ExpenseStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Export metadata
    pub metadata: ExportMetadata,

    /// All expenses in ledger order
    pub expenses: Vec<Expense>,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub total: f64,
    pub earliest_date: Option<String>,
    pub latest_date: Option<String>,
}

impl LedgerExport {
    /// Snapshot the store
    pub fn from_store(store: &ExpenseStore) -> Self {
        let metadata = ExportMetadata {
            expense_count: store.len(),
            total: reports::total(store),
            earliest_date: store.iter().map(|e| e.date.clone()).min(),
            latest_date: store.iter().map(|e| e.date.clone()).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata,
            expenses: store.all().to_vec(),
        }
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(store: &ExpenseStore, writer: &mut W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerExport::from_store(store);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
