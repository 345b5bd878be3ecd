//! Audit logging for the budget tracker
//!
//! Records every income change and every expense added or deleted in an
//! append-only JSON-lines log, which `budget history` reads back.

mod entry;
mod logger;

pub use entry::{AuditEntry, BudgetEvent};
pub use logger::AuditLogger;
