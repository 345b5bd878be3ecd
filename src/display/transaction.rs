//! Transaction display formatting
//!
//! Renders the transaction list as a table for terminal output.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{format_date, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a table, in list order
pub fn format_transaction_table(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: format_date(txn.date, date_format),
        category: txn.category.clone(),
        amount: txn.amount.format_with_symbol(currency_symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .modify(Columns::single(3), Alignment::right());

    format!("{}\n", table)
}

/// One-line description of a transaction, e.g. for delete confirmations
pub fn format_transaction_short(txn: &Transaction, currency_symbol: &str) -> String {
    format!(
        "{} {} {} (id {})",
        txn.date.format(crate::models::DATE_FORMAT),
        txn.category,
        txn.amount.format_with_symbol(currency_symbol),
        txn.id
    )
}
