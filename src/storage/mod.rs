//! Storage layer for the budget tracker
//!
//! Budget state is persisted into a flat string-to-string key-value store,
//! the same shape as browser local storage. `KeyValueStore` is the seam;
//! `MemoryStore` and `JsonFileStore` are the two backends, and `records`
//! holds the encoding of the values kept under each key.

pub mod file_store;
pub mod memory;
pub mod records;

pub use file_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::BudgetResult;

/// Key holding the income as a decimal string
pub const INCOME_KEY: &str = "income";

/// Key holding the JSON array of transactions
pub const TRANSACTIONS_KEY: &str = "transactions";

/// A string-keyed store of string values
///
/// Writes are synchronous: when `set` returns `Ok`, the value is durable
/// as far as the backend is concerned.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> BudgetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> BudgetResult<()>;
}
