//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DIR` environment variable (if set)
//! 2. Platform config directory (`~/.config/expense-ledger` on Linux,
//!    `%APPDATA%\expense-ledger` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "EXPENSE_LEDGER_DIR";

/// Default name of the binary ledger file
pub const DEFAULT_DATA_FILE: &str = "expenses.dat";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for settings and data
    base_dir: PathBuf,
    /// Explicit ledger file, bypassing `base_dir/expenses.dat`
    data_file: Option<PathBuf>,
}

impl LedgerPaths {
    /// Resolve paths from the environment and platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self {
            base_dir,
            data_file: None,
        })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            data_file: None,
        }
    }

    /// Use an explicit ledger file instead of the default location
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.data_file = data_file;
        self
    }

    /// Check if the ledger file was set explicitly
    pub fn has_data_file_override(&self) -> bool {
        self.data_file.is_some()
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the binary ledger file
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join(DEFAULT_DATA_FILE))
    }

    /// Get the path the previous ledger file is copied to before a save
    pub fn backup_file(&self) -> PathBuf {
        let mut name = self.data_file().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "expense-ledger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine home directory".into()))
}
