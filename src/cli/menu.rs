//! Interactive numbered menu
//!
//! Reads one line per answer so it can be driven by a terminal or by a
//! script. Changes stay in memory until the user picks Exit (or input ends),
//! at which point the ledger is saved once.

use std::io::{BufRead, Write};

use crate::display::{
    format_expense_details, format_expense_table, format_query_result, format_statistics,
};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{ExpenseDraft, ExpensePatch};
use crate::reports::{self, Statistics};
use crate::store::Confirmation;
use crate::validation::{parse_amount_input, parse_date_input, validate_date, TODAY};

use super::expense::parse_id;

const MENU: &str = "
=== Expense Ledger Menu ===
1. Add New Expense
2. View All Expenses
3. View Expenses by Category
4. View Expenses by Date Range
5. Search Expenses
6. Modify Expense
7. Delete Expense
8. Show Statistics
9. Exit
";

/// Run the menu until the user exits, then save
pub fn run_menu<R: BufRead, W: Write>(ledger: &mut Ledger, input: R, output: W) -> LedgerResult<()> {
    let mut menu = Menu {
        ledger,
        input,
        output,
    };
    menu.run()
}

struct Menu<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> LedgerResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice (1-9): ")? else {
                break;
            };

            let result = match choice.trim() {
                "1" => self.add(),
                "2" => self.view_all(),
                "3" => self.by_category(),
                "4" => self.by_date_range(),
                "5" => self.search(),
                "6" => self.modify(),
                "7" => self.delete(),
                "8" => self.statistics(),
                "9" => break,
                _ => {
                    writeln!(self.output, "Invalid choice! Please enter a number between 1-9.")?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(LedgerError::Cancelled) => writeln!(self.output, "Cancelled.")?,
                Err(e) if e.is_recoverable() => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }

        self.ledger.save()?;
        writeln!(
            self.output,
            "Data saved to '{}'. Goodbye!",
            self.ledger.file().path().display()
        )?;
        Ok(())
    }

    /// Print `message` and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Like `prompt`, but end of input cancels the current action
    fn ask(&mut self, message: &str) -> LedgerResult<String> {
        self.prompt(message)?.ok_or(LedgerError::Cancelled)
    }

    fn ensure_not_empty(&mut self) -> LedgerResult<bool> {
        if self.ledger.store().is_empty() {
            writeln!(self.output, "No expenses recorded.")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn add(&mut self) -> LedgerResult<()> {
        if self.ledger.store().is_full() {
            return Err(LedgerError::CapacityExceeded {
                capacity: self.ledger.store().capacity(),
            });
        }

        let date = loop {
            let raw = self.ask(&format!("Enter date (YYYY-MM-DD) or '{}': ", TODAY))?;
            match parse_date_input(&raw) {
                Ok(date) => break date,
                Err(_) => writeln!(self.output, "Invalid date format! Please use YYYY-MM-DD format.")?,
            }
        };

        let amount = loop {
            let raw = self.ask("Enter amount: ")?;
            match parse_amount_input(&raw) {
                Ok(amount) => break amount,
                Err(_) => writeln!(self.output, "Invalid amount! Please enter a positive number.")?,
            }
        };

        let category = self.ask("Enter category: ")?;
        let description = self.ask("Enter description: ")?;

        let id = self
            .ledger
            .store_mut()
            .add(ExpenseDraft::new(date, amount, category, description))?;
        writeln!(self.output, "\nExpense added successfully! (ID: {})", id)?;
        Ok(())
    }

    fn view_all(&mut self) -> LedgerResult<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let store = self.ledger.store();
        let table = format_expense_table(
            store.iter(),
            reports::total(store),
            "TOTAL EXPENSES:",
            self.ledger.currency(),
        );
        write!(self.output, "\n{}", table)?;
        Ok(())
    }

    fn by_category(&mut self) -> LedgerResult<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let name = self.ask("Enter category to view: ")?;
        let result = reports::by_category(self.ledger.store(), &name);
        let text = format_query_result(
            &result,
            "CATEGORY TOTAL:",
            &format!("No expenses found in category '{}'", name),
            self.ledger.currency(),
        );
        write!(self.output, "\nExpenses in category '{}':\n{}", name, text)?;
        Ok(())
    }

    fn by_date_range(&mut self) -> LedgerResult<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let start = self.ask("Enter start date (YYYY-MM-DD): ")?;
        if !validate_date(start.trim()) {
            writeln!(self.output, "Invalid start date format!")?;
            return Ok(());
        }
        let end = self.ask("Enter end date (YYYY-MM-DD): ")?;
        if !validate_date(end.trim()) {
            writeln!(self.output, "Invalid end date format!")?;
            return Ok(());
        }

        let result = reports::by_date_range(self.ledger.store(), start.trim(), end.trim())?;
        let text = format_query_result(
            &result,
            "PERIOD TOTAL:",
            "No expenses found in the specified date range.",
            self.ledger.currency(),
        );
        write!(
            self.output,
            "\nExpenses from {} to {}:\n{}",
            start.trim(),
            end.trim(),
            text
        )?;
        Ok(())
    }

    fn search(&mut self) -> LedgerResult<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let term = self.ask("Enter search term (description or category): ")?;
        let result = reports::search(self.ledger.store(), &term);
        let text = format_query_result(
            &result,
            "SEARCH TOTAL:",
            "No expenses found matching your search.",
            self.ledger.currency(),
        );
        write!(self.output, "\nSearch results for '{}':\n{}", term, text)?;
        Ok(())
    }

    fn modify(&mut self) -> LedgerResult<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let id = parse_id(&self.ask("Enter expense ID to modify: ")?)?;
        let current = self
            .ledger
            .store()
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        write!(
            self.output,
            "\nCurrent expense details:\n{}",
            format_expense_details(&current, self.ledger.currency())
        )?;
        writeln!(self.output, "\nEnter new details (press Enter to keep current value):")?;

        let patch = ExpensePatch {
            date: Some(self.ask(&format!("New date (YYYY-MM-DD) [{}]: ", current.date))?),
            amount: Some(self.ask(&format!("New amount [{}]: ", current.amount))?),
            category: Some(self.ask(&format!("New category [{}]: ", current.category))?),
            description: Some(self.ask(&format!("New description [{}]: ", current.description))?),
        };

        self.ledger.store_mut().update(id, patch)?;
        writeln!(self.output, "Expense modified successfully!")?;
        Ok(())
    }

    fn delete(&mut self) -> LedgerResult<()> {
        if !self.ensure_not_empty()? {
            return Ok(());
        }
        let id = parse_id(&self.ask("Enter expense ID to delete: ")?)?;
        let details = self
            .ledger
            .store()
            .get(id)
            .map(|e| format_expense_details(e, self.ledger.currency()))
            .ok_or_else(|| LedgerError::expense_not_found(id.to_string()))?;

        write!(self.output, "\nExpense to delete:\n{}", details)?;
        let answer = self.ask("\nAre you sure you want to delete this expense? (y/n): ")?;
        let confirmed = matches!(answer.trim().chars().next(), Some('y' | 'Y'));

        match self.ledger.store_mut().delete(id, Confirmation::from(confirmed)) {
            Ok(_) => writeln!(self.output, "Expense deleted successfully!")?,
            Err(LedgerError::Cancelled) => writeln!(self.output, "Deletion cancelled.")?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn statistics(&mut self) -> LedgerResult<()> {
        match Statistics::compute(self.ledger.store()) {
            Some(stats) => {
                let text = format_statistics(&stats, self.ledger.currency());
                write!(self.output, "\n{}", text)?;
            }
            None => writeln!(self.output, "No expenses recorded.")?,
        }
        Ok(())
    }
}
