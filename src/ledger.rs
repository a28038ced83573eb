//! Session context tying the store to its file and settings
//!
//! One `Ledger` is opened per process and handed to every command; nothing
//! else holds the store.

use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::storage::{LedgerFile, LoadReport};
use crate::store::ExpenseStore;

/// An open expense ledger
#[derive(Debug)]
pub struct Ledger {
    store: ExpenseStore,
    file: LedgerFile,
    currency: String,
}

impl Ledger {
    /// Load the ledger described by `paths` and `settings`
    ///
    /// An explicit data file on `paths` wins over the one in settings.
    pub fn open(paths: &LedgerPaths, settings: &Settings) -> LedgerResult<(Self, LoadReport)> {
        let paths = if paths.has_data_file_override() {
            paths.clone()
        } else {
            paths.clone().with_data_file(settings.resolved_data_file(paths))
        };

        let backup = settings.backup_on_save.then(|| paths.backup_file());
        let file = LedgerFile::new(paths.data_file()).with_backup(backup);
        let (store, report) = file.load(settings.capacity, settings.id_policy)?;

        Ok((
            Self {
                store,
                file,
                currency: settings.currency_symbol.clone(),
            },
            report,
        ))
    }

    /// Wrap an existing store, mainly for tests
    pub fn from_parts(store: ExpenseStore, file: LedgerFile, currency: impl Into<String>) -> Self {
        Self {
            store,
            file,
            currency: currency.into(),
        }
    }

    /// Read access to the records
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Write access to the records
    pub fn store_mut(&mut self) -> &mut ExpenseStore {
        &mut self.store
    }

    /// Backing file
    pub fn file(&self) -> &LedgerFile {
        &self.file
    }

    /// Currency symbol for display
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Persist the current records
    pub fn save(&self) -> LedgerResult<()> {
        self.file.save(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseDraft};
    use crate::store::IdPolicy;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_open_fresh_and_save() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let (mut ledger, report) = Ledger::open(&paths, &settings).unwrap();
        assert!(report.fresh);

        ledger
            .store_mut()
            .add(ExpenseDraft::new("2024-01-01", Amount::new(2.0), "Tea", ""))
            .unwrap();
        ledger.save().unwrap();

        let (reopened, report) = Ledger::open(&paths, &settings).unwrap();
        assert_eq!(reopened.store().len(), 1);
        assert_eq!(report.records_read, 1);
        assert_eq!(reopened.file().path(), temp_dir.path().join("expenses.dat"));
    }

    #[test]
    fn test_settings_drive_store_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            capacity: 3,
            id_policy: IdPolicy::LiveCount,
            currency_symbol: "€".into(),
            data_file: Some(PathBuf::from("books.dat")),
            ..Settings::default()
        };

        let (ledger, _) = Ledger::open(&paths, &settings).unwrap();
        assert_eq!(ledger.store().capacity(), 3);
        assert_eq!(ledger.store().id_policy(), IdPolicy::LiveCount);
        assert_eq!(ledger.currency(), "€");
        assert_eq!(ledger.file().path(), temp_dir.path().join("books.dat"));
    }

    #[test]
    fn test_explicit_path_beats_settings() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("cli.dat");
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf())
            .with_data_file(Some(explicit.clone()));
        let settings = Settings {
            data_file: Some(PathBuf::from("books.dat")),
            ..Settings::default()
        };

        let (ledger, _) = Ledger::open(&paths, &settings).unwrap();
        assert_eq!(ledger.file().path(), explicit);
    }
}
