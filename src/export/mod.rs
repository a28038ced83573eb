//! Export module for the expense ledger
//!
//! Provides ledger export in multiple formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};
use crate::store::ExpenseStore;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(LedgerError::Validation(format!(
                "Unknown export format: '{}'. Use csv, json or yaml",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export the ledger in the requested format
pub fn export<W: Write>(store: &ExpenseStore, format: ExportFormat, writer: &mut W) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(store, writer),
        ExportFormat::Json => export_json(store, writer, true),
        ExportFormat::Yaml => export_yaml(store, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("xml".parse::<ExportFormat>().unwrap_err().is_validation());
    }
}
