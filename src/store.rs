//! In-memory record store
//!
//! The store owns the ordered expense sequence and the id counter for one
//! session. Insertion order is canonical; deletes shift later records down
//! rather than swapping, so relative order always survives.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Expense, ExpenseDraft, ExpenseField, ExpenseId, ExpensePatch, CATEGORY_MAX_BYTES,
    DESCRIPTION_MAX_BYTES,
};
use crate::validation::{clamp_text, parse_amount_input, validate_amount, validate_date};

/// Default number of expenses a store accepts
pub const DEFAULT_CAPACITY: usize = 1000;

/// How the store picks the id of a new expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// One past the highest id ever seen this session; never reused
    #[default]
    Monotonic,
    /// Live record count plus one, as older ledger files assumed
    LiveCount,
}

/// Whether the caller confirmed a destructive operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// What an update actually changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Fields replaced with new values
    pub applied: Vec<ExpenseField>,
    /// Fields supplied but left unchanged because they failed validation
    pub rejected: Vec<ExpenseField>,
}

impl UpdateOutcome {
    /// True if nothing was replaced
    pub fn is_unchanged(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Ordered collection of expenses with id assignment
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    records: Vec<Expense>,
    capacity: usize,
    id_policy: IdPolicy,
    /// `None` once the id space is used up
    next_id: Option<ExpenseId>,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, IdPolicy::default())
    }

    /// Create an empty store with an explicit capacity and id policy
    pub fn with_capacity(capacity: usize, id_policy: IdPolicy) -> Self {
        Self {
            records: Vec::new(),
            capacity,
            id_policy,
            next_id: Some(ExpenseId::new(1)),
        }
    }

    /// Replace the whole collection, as a load does
    ///
    /// Records beyond the capacity are dropped with a warning.
    pub fn from_records(mut records: Vec<Expense>, capacity: usize, id_policy: IdPolicy) -> Self {
        if records.len() > capacity {
            warn!(
                "Ledger holds {} expenses but capacity is {}; ignoring the rest",
                records.len(),
                capacity
            );
            records.truncate(capacity);
        }

        let next_id = match records.iter().map(|e| e.id).max() {
            Some(highest) => highest.checked_next(),
            None => Some(ExpenseId::new(1)),
        };

        Self {
            records,
            capacity,
            id_policy,
            next_id,
        }
    }

    /// Number of live expenses
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store has no expenses
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of expenses
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if another add would be refused
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Id policy in effect
    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    /// Id the next add will receive, or `None` if no id is left
    pub fn next_id(&self) -> Option<ExpenseId> {
        match self.id_policy {
            IdPolicy::Monotonic => self.next_id,
            IdPolicy::LiveCount => u32::try_from(self.records.len() + 1)
                .ok()
                .map(ExpenseId::new)
                .filter(|id| *id <= ExpenseId::MAX),
        }
    }

    /// Append a new expense and return its id
    pub fn add(&mut self, draft: ExpenseDraft) -> LedgerResult<ExpenseId> {
        if self.is_full() {
            return Err(LedgerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if !validate_date(&draft.date) {
            return Err(LedgerError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                draft.date
            )));
        }
        validate_amount(draft.amount)?;

        let id = self.next_id().ok_or_else(|| {
            LedgerError::Storage(format!(
                "No expense ids left: ids are limited to {}",
                ExpenseId::MAX
            ))
        })?;
        self.next_id = match (id.checked_next(), self.next_id) {
            (Some(following), Some(current)) => Some(following.max(current)),
            _ => None,
        };
        self.records.push(Expense::from_draft(id, draft));

        info!("Added expense {}", id);
        Ok(id)
    }

    /// Look up an expense by id
    ///
    /// Returns the first match in store order; duplicate ids can only come
    /// from the live-count policy.
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Apply the non-empty, valid fields of `patch` to an expense
    ///
    /// Invalid or empty fields keep their current value; only an unknown id
    /// is an error.
    pub fn update(&mut self, id: ExpenseId, patch: ExpensePatch) -> LedgerResult<UpdateOutcome> {
        let expense = self
            .records
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        let mut outcome = UpdateOutcome::default();

        if let Some(date) = non_empty(patch.date) {
            if validate_date(&date) {
                expense.date = date;
                outcome.applied.push(ExpenseField::Date);
            } else {
                outcome.rejected.push(ExpenseField::Date);
            }
        }

        if let Some(raw) = non_empty(patch.amount) {
            match parse_amount_input(&raw) {
                Ok(amount) => {
                    expense.amount = amount;
                    outcome.applied.push(ExpenseField::Amount);
                }
                Err(_) => outcome.rejected.push(ExpenseField::Amount),
            }
        }

        if let Some(category) = non_empty(patch.category) {
            expense.category = clamp_text(&category, CATEGORY_MAX_BYTES);
            outcome.applied.push(ExpenseField::Category);
        }

        if let Some(description) = non_empty(patch.description) {
            expense.description = clamp_text(&description, DESCRIPTION_MAX_BYTES);
            outcome.applied.push(ExpenseField::Description);
        }

        if !outcome.rejected.is_empty() {
            warn!(
                "Expense {}: kept current value for invalid {:?}",
                id, outcome.rejected
            );
        }

        Ok(outcome)
    }

    /// Remove an expense, keeping the order of the rest
    pub fn delete(&mut self, id: ExpenseId, confirmation: Confirmation) -> LedgerResult<Expense> {
        let position = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        if confirmation == Confirmation::Declined {
            return Err(LedgerError::Cancelled);
        }

        let removed = self.records.remove(position);
        info!("Deleted expense {}", id);
        Ok(removed)
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.records
    }

    /// Iterate over expenses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ExpenseStore {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim_end_matches(['\n', '\r']).to_string())
        .filter(|v| !v.is_empty())
}
