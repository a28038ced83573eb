//! Storage layer for the expense ledger
//!
//! Loads and saves the whole store to a single binary file with atomic
//! writes. A missing file is a fresh ledger; a damaged one loads whatever
//! complete records it still holds.

pub mod codec;
pub mod file_io;

pub use codec::{decode, encode, Decoded, RecordLayout};
pub use file_io::{backup_file, read_bytes, write_bytes_atomic};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::LedgerResult;
use crate::store::{ExpenseStore, IdPolicy};

/// What a load found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// No ledger file existed yet
    pub fresh: bool,
    /// Record count stored in the file prefix
    pub declared: usize,
    /// Records actually recovered
    pub records_read: usize,
    pub layout: RecordLayout,
}

impl LoadReport {
    /// True if the file held fewer complete records than it declared
    pub fn is_partial(&self) -> bool {
        self.records_read < self.declared
    }

    /// Message for the user when the load was incomplete
    pub fn warning(&self) -> Option<String> {
        self.is_partial().then(|| {
            format!(
                "Ledger file is damaged: recovered {} of {} expenses",
                self.records_read, self.declared
            )
        })
    }
}

/// The on-disk ledger
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
    backup: Option<PathBuf>,
}

impl LedgerFile {
    /// Ledger stored at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: None,
        }
    }

    /// Copy the previous file to `backup` before every save
    pub fn with_backup(mut self, backup: Option<PathBuf>) -> Self {
        self.backup = backup;
        self
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger into a new store
    ///
    /// # Errors
    ///
    /// Only an unreadable existing file is an error. A missing file gives an
    /// empty store; a truncated one gives the records that survived.
    pub fn load(
        &self,
        capacity: usize,
        id_policy: IdPolicy,
    ) -> LedgerResult<(ExpenseStore, LoadReport)> {
        let Some(bytes) = read_bytes(&self.path)? else {
            debug!("No ledger at {}, starting fresh", self.path.display());
            let report = LoadReport {
                fresh: true,
                declared: 0,
                records_read: 0,
                layout: RecordLayout::Packed,
            };
            return Ok((ExpenseStore::with_capacity(capacity, id_policy), report));
        };

        let decoded = decode(&bytes);
        let report = LoadReport {
            fresh: false,
            declared: decoded.declared,
            records_read: decoded.records.len(),
            layout: decoded.layout,
        };

        if let Some(warning) = report.warning() {
            warn!("{} ({})", warning, self.path.display());
        }
        debug!(
            "Loaded {} expenses from {} ({} layout)",
            report.records_read,
            self.path.display(),
            report.layout
        );

        let store = ExpenseStore::from_records(decoded.records, capacity, id_policy);
        Ok((store, report))
    }

    /// Write the whole store to disk
    ///
    /// The store itself is never touched, so a failed save leaves the
    /// in-memory ledger intact.
    pub fn save(&self, store: &ExpenseStore) -> LedgerResult<()> {
        let bytes = encode(store.all())?;

        if let Some(backup) = &self.backup {
            if backup_file(&self.path, backup)? {
                debug!("Backed up previous ledger to {}", backup.display());
            }
        }

        write_bytes_atomic(&self.path, &bytes)?;
        debug!(
            "Saved {} expenses to {}",
            store.len(),
            self.path.display()
        );
        Ok(())
    }
}
