//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod expense;
pub mod export;
pub mod menu;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use menu::run_menu;
pub use report::{handle_report_command, ReportCommands};
