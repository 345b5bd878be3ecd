//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing and deleting expenses.

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_short, format_transaction_table, messages};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{TransactionId, DATE_FORMAT};
use crate::services::BudgetStore;
use crate::storage::KeyValueStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record an expense
    Add {
        /// Expense category (e.g., "Food")
        category: String,

        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions
    List {
        /// Show only the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delete a transaction by ID
    Delete {
        /// Transaction ID (as shown by `transaction list`)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            date,
        } => {
            let date =
                date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());

            let txn = store.add_transaction_from_input(&category, &amount, &date)?;
            println!("{}", messages::expense_added(txn.amount, symbol));
            println!("  {}", format_transaction_short(&txn, symbol));

            if store.is_over_budget() {
                println!("Warning: {}", messages::OVER_BUDGET);
            }
        }

        TransactionCommands::List { limit } => {
            let all = store.transactions();
            let shown = match limit {
                Some(n) if n < all.len() => &all[all.len() - n..],
                _ => all,
            };
            print!(
                "{}",
                format_transaction_table(shown, symbol, &settings.date_format)
            );

            if shown.len() < all.len() {
                println!("Showing {} of {} transactions.", shown.len(), all.len());
            }
        }

        TransactionCommands::Delete { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| BudgetError::Validation(format!("Invalid transaction ID: {}", id)))?;

            match store.delete_transaction(id) {
                Ok(removed) => {
                    println!("{}", messages::expense_deleted(removed.amount, symbol));
                }
                Err(e) if e.is_not_found() => {
                    println!("No transaction with ID {}; nothing deleted.", id);
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn add(store: &mut BudgetStore<MemoryStore>, category: &str, amount: &str) -> BudgetResult<()> {
        handle_transaction_command(
            store,
            &Settings::default(),
            TransactionCommands::Add {
                category: category.into(),
                amount: amount.into(),
                date: Some("2024-03-01".into()),
            },
        )
    }

    #[test]
    fn test_add_and_delete() {
        let mut store = BudgetStore::load(MemoryStore::new());
        add(&mut store, "Food", "20").unwrap();
        let id = store.transactions()[0].id;

        handle_transaction_command(
            &mut store,
            &Settings::default(),
            TransactionCommands::Delete { id: id.to_string() },
        )
        .unwrap();

        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_add_without_date_uses_today() {
        let mut store = BudgetStore::load(MemoryStore::new());
        handle_transaction_command(
            &mut store,
            &Settings::default(),
            TransactionCommands::Add {
                category: "Food".into(),
                amount: "5".into(),
                date: None,
            },
        )
        .unwrap();

        assert_eq!(store.transactions()[0].date, Local::now().date_naive());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut store = BudgetStore::load(MemoryStore::new());
        let err = add(&mut store, "", "10").unwrap_err();
        assert!(err.is_validation());

        let err = add(&mut store, "Food", "-5").unwrap_err();
        assert!(err.is_validation());
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = BudgetStore::load(MemoryStore::new());
        add(&mut store, "Food", "20").unwrap();

        handle_transaction_command(
            &mut store,
            &Settings::default(),
            TransactionCommands::Delete { id: "42".into() },
        )
        .unwrap();

        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_delete_rejects_malformed_id() {
        let mut store = BudgetStore::load(MemoryStore::new());
        let err = handle_transaction_command(
            &mut store,
            &Settings::default(),
            TransactionCommands::Delete { id: "abc".into() },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
