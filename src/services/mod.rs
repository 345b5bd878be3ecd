//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed fields and persistence of every change.

pub mod budget;

pub use budget::BudgetStore;
