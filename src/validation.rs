//! Input validation shared by every mutating operation
//!
//! Date checks are format-only: `2024-13-40` passes. Lexicographic order on
//! the fixed-width form is what the range query relies on, not calendar
//! correctness.

use chrono::Local;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, DATE_LEN};

/// Keyword accepted in place of a date
pub const TODAY: &str = "today";

/// Check that `date` looks like `YYYY-MM-DD`
pub fn validate_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != DATE_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Today's local date as `YYYY-MM-DD`
pub fn current_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Accept `today` or a well-formed date
pub fn parse_date_input(input: &str) -> LedgerResult<String> {
    let input = input.trim();
    if input == TODAY {
        return Ok(current_date());
    }
    if validate_date(input) {
        Ok(input.to_string())
    } else {
        Err(LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            input
        )))
    }
}

/// Reject amounts that are not strictly positive
pub fn validate_amount(amount: Amount) -> LedgerResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::Validation(format!(
            "Invalid amount: {}. Amount must be a positive number",
            amount
        )))
    }
}

/// Parse and validate an amount typed by the user
pub fn parse_amount_input(input: &str) -> LedgerResult<Amount> {
    let amount = Amount::parse(input)
        .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;
    validate_amount(amount)?;
    Ok(amount)
}

/// Strip the line terminator and cut `text` to at most `max_bytes` bytes
/// without splitting a character
pub fn clamp_text(text: &str, max_bytes: usize) -> String {
    let text = text.trim_end_matches(['\n', '\r']);
    if text.len() <= max_bytes {
        return text.to_string();
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
