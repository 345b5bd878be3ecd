//! Display formatting for terminal output
//!
//! Provides utilities for formatting the budget for terminal display,
//! including tables, colors, and status messages.

pub mod messages;
pub mod summary;
pub mod transaction;

pub use summary::{colorize, format_category_summary, format_overview};
pub use transaction::{format_transaction_short, format_transaction_table};
