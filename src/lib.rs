//! Expense ledger - a personal expense tracker for the terminal
//!
//! Keeps a list of dated, categorized expenses in a compact binary file and
//! answers the usual questions about it: what did I spend on a category,
//! within a period, what mentions a word, and how does it all add up.
//!
//! # Architecture
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: Expense records, ids and amounts
//! - `validation`: Date and amount checks shared by every mutation
//! - `store`: The in-memory record store
//! - `reports`: Queries and statistics over the store
//! - `storage`: Binary file codec and atomic persistence
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `ledger`: Store plus backing file for one session
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{LedgerPaths, Settings};
//! use expense_ledger::ledger::Ledger;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let (ledger, _report) = Ledger::open(&paths, &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use models::{Amount, Expense, ExpenseDraft, ExpenseId, ExpensePatch};
pub use store::{Confirmation, ExpenseStore, IdPolicy};
