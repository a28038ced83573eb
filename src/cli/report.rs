//! Report CLI commands
//!
//! Category, date-range and text-search views plus statistics.

use clap::Subcommand;

use crate::display::{format_query_result, format_statistics};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::reports::{self, Statistics};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show expenses in a category (case-insensitive)
    Category {
        /// Category name
        name: String,
    },
    /// Show expenses between two dates, inclusive
    Range {
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD)
        end: String,
    },
    /// Search descriptions and categories (case-sensitive)
    Search {
        /// Text to look for
        term: String,
    },
    /// Show totals, category breakdown and extremes
    Stats,
}

/// Handle a report command
pub fn handle_report_command(ledger: &Ledger, cmd: ReportCommands) -> LedgerResult<()> {
    let store = ledger.store();
    let currency = ledger.currency();

    if store.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    match cmd {
        ReportCommands::Category { name } => {
            let result = reports::by_category(store, &name);
            println!("Expenses in category '{}':", name);
            print!(
                "{}",
                format_query_result(
                    &result,
                    "CATEGORY TOTAL:",
                    &format!("No expenses found in category '{}'", name),
                    currency
                )
            );
        }

        ReportCommands::Range { start, end } => {
            let result = reports::by_date_range(store, start.trim(), end.trim())?;
            println!("Expenses from {} to {}:", start.trim(), end.trim());
            print!(
                "{}",
                format_query_result(
                    &result,
                    "PERIOD TOTAL:",
                    "No expenses found in the specified date range.",
                    currency
                )
            );
        }

        ReportCommands::Search { term } => {
            let result = reports::search(store, &term);
            println!("Search results for '{}':", term);
            print!(
                "{}",
                format_query_result(
                    &result,
                    "SEARCH TOTAL:",
                    "No expenses found matching your search.",
                    currency
                )
            );
        }

        ReportCommands::Stats => {
            if let Some(stats) = Statistics::compute(store) {
                print!("{}", format_statistics(&stats, currency));
            }
        }
    }

    Ok(())
}
