//! Core data models for the budget tracker
//!
//! This module contains the data structures of the budgeting domain:
//! money amounts, transaction ids, transactions and derived summaries.

pub mod ids;
pub mod money;
pub mod summary;
pub mod transaction;

pub use ids::{IdSequence, TransactionId};
pub use money::{Money, MoneyParseError, MAX_ABS_CENTS};
pub use summary::{category_totals, BudgetSnapshot, CategoryTotal};
pub use transaction::{
    format_date, try_format_date, NewTransaction, Transaction, TransactionValidationError,
    DATE_FORMAT,
};
