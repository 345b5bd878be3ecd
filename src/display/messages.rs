//! User-facing status messages
//!
//! Shared by the CLI and the terminal UI so both surfaces report the same
//! outcome in the same words.

use crate::models::Money;

pub const OVER_BUDGET: &str = "You are over budget!";
pub const MISSING_FIELDS: &str = "Please fill in all fields!";

pub fn income_set(income: Money, currency_symbol: &str) -> String {
    format!("Income set to {}", income.format_with_symbol(currency_symbol))
}

pub fn expense_added(amount: Money, currency_symbol: &str) -> String {
    format!(
        "Expense of {} added!",
        amount.format_with_symbol(currency_symbol)
    )
}

pub fn expense_deleted(amount: Money, currency_symbol: &str) -> String {
    format!(
        "Expense of {} deleted!",
        amount.format_with_symbol(currency_symbol)
    )
}
