//! Budget Tracker - a personal income and expense tracker for the terminal
//!
//! This library records a single income figure and a list of dated,
//! categorized expenses, persists them in a key-value string store, and
//! derives the balance, total expenses and per-category totals that the
//! command-line and terminal interfaces render.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, summaries)
//! - `storage`: Key-value storage seam with in-memory and JSON file backends
//! - `services`: The budget store (state, mutations, aggregates)
//! - `audit`: Audit logging system
//! - `cli` / `display`: Command-line handlers and their output formatting
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::services::BudgetStore;
//! use budget_tracker::storage::MemoryStore;
//!
//! let mut store = BudgetStore::load(MemoryStore::new());
//! store.set_income_from_input("100").unwrap();
//! store.add_transaction_from_input("Food", "150", "2024-01-01").unwrap();
//!
//! assert!(store.is_over_budget());
//! assert_eq!(store.balance().to_string(), "-50.00");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
