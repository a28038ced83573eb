//! User settings for the expense ledger
//!
//! Manages preferences such as the store capacity, how new ids are assigned
//! and whether the previous ledger file is kept as a backup on save.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::store::IdPolicy;

/// User settings for the expense ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of expenses the ledger holds
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// How ids are assigned to new expenses
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file location, relative paths resolve against the config dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Copy the previous ledger file to `<file>.bak` before saving
    #[serde(default = "default_backup_on_save")]
    pub backup_on_save: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_capacity() -> usize {
    1000
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_backup_on_save() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            capacity: default_capacity(),
            id_policy: IdPolicy::default(),
            currency_symbol: default_currency(),
            data_file: None,
            backup_on_save: default_backup_on_save(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            LedgerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.capacity == 0 {
            return Err(LedgerError::Config(
                "capacity must be at least 1".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the configured ledger file against the config directory
    pub fn resolved_data_file(&self, paths: &LedgerPaths) -> Option<PathBuf> {
        self.data_file.as_ref().map(|file| {
            if file.is_absolute() {
                file.clone()
            } else {
                paths.base_dir().join(file)
            }
        })
    }
}
