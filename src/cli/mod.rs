//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the budget store.

pub mod income;
pub mod summary;
pub mod transaction;

pub use income::{handle_income_command, IncomeCommands};
pub use summary::{handle_history_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
