//! Expense CLI commands
//!
//! Implements CLI commands for adding, listing, editing and deleting
//! expenses.

use clap::Subcommand;

use crate::display::{format_expense_details, format_expense_table};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{ExpenseDraft, ExpenseField, ExpenseId, ExpensePatch};
use crate::reports;
use crate::store::Confirmation;
use crate::validation::{parse_amount_input, parse_date_input, TODAY};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Expense date (YYYY-MM-DD or "today")
        #[arg(short, long, default_value = TODAY)]
        date: String,
    },
    /// List all expenses
    List,
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense; invalid values keep the current one
    Edit {
        /// Expense ID
        id: String,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(ledger: &mut Ledger, cmd: ExpenseCommands) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let date = parse_date_input(&date)?;
            let amount = parse_amount_input(&amount)?;
            let draft = ExpenseDraft::new(date, amount, category, description.unwrap_or_default());

            let id = ledger.store_mut().add(draft)?;
            ledger.save()?;

            println!("Expense added successfully! (ID: {})", id);
        }

        ExpenseCommands::List => {
            let store = ledger.store();
            if store.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }
            print!(
                "{}",
                format_expense_table(
                    store.iter(),
                    reports::total(store),
                    "TOTAL EXPENSES:",
                    ledger.currency()
                )
            );
        }

        ExpenseCommands::Show { id } => {
            let id = parse_id(&id)?;
            let expense = ledger
                .store()
                .get(id)
                .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, ledger.currency()));
        }

        ExpenseCommands::Edit {
            id,
            date,
            amount,
            category,
            description,
        } => {
            let id = parse_id(&id)?;
            let patch = ExpensePatch {
                date,
                amount,
                category,
                description,
            };

            let outcome = ledger.store_mut().update(id, patch)?;
            for field in &outcome.rejected {
                println!("Kept current {}: new value was invalid", field);
            }

            if outcome.is_unchanged() {
                println!("No changes made to expense {}.", id);
                return Ok(());
            }

            ledger.save()?;
            println!("Expense modified successfully! ({})", describe(&outcome.applied));
        }

        ExpenseCommands::Delete { id, force } => {
            let id = parse_id(&id)?;
            let expense = ledger
                .store()
                .get(id)
                .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(expense, ledger.currency()));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = ledger.store_mut().delete(id, Confirmation::Confirmed)?;
            ledger.save()?;
            println!("Deleted expense: {}", deleted);
        }
    }

    Ok(())
}

/// Parse an expense id typed by the user
pub fn parse_id(input: &str) -> LedgerResult<ExpenseId> {
    input
        .parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid ID: '{}'", input.trim())))
}

fn describe(fields: &[ExpenseField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3").unwrap(), ExpenseId::new(3));
        assert!(parse_id("x").unwrap_err().is_validation());
    }

    #[test]
    fn test_describe_fields() {
        assert_eq!(
            describe(&[ExpenseField::Date, ExpenseField::Category]),
            "date, category"
        );
    }
}
