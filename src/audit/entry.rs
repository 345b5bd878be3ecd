//! Audit log records
//!
//! One record per budget mutation, carrying the typed values that changed so
//! the history renders without consulting the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::money::{self, Money};
use crate::models::{Transaction, DATE_FORMAT};

/// A change made to the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BudgetEvent {
    /// Income replaced
    IncomeSet {
        #[serde(with = "money::decimal")]
        previous: Money,
        #[serde(with = "money::decimal")]
        current: Money,
    },
    /// Expense appended to the list
    ExpenseAdded { transaction: Transaction },
    /// Expense removed from the list
    ExpenseDeleted { transaction: Transaction },
}

impl BudgetEvent {
    /// Short label for history listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::IncomeSet { .. } => "income set",
            Self::ExpenseAdded { .. } => "expense added",
            Self::ExpenseDeleted { .. } => "expense deleted",
        }
    }
}

/// A timestamped audit record, stored as one JSON line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub event: BudgetEvent,
}

impl AuditEntry {
    /// Record `event` as happening now
    pub fn now(event: BudgetEvent) -> Self {
        Self {
            at: Utc::now(),
            event,
        }
    }

    pub fn income_set(previous: Money, current: Money) -> Self {
        Self::now(BudgetEvent::IncomeSet { previous, current })
    }

    pub fn expense_added(transaction: &Transaction) -> Self {
        Self::now(BudgetEvent::ExpenseAdded {
            transaction: transaction.clone(),
        })
    }

    pub fn expense_deleted(transaction: &Transaction) -> Self {
        Self::now(BudgetEvent::ExpenseDeleted {
            transaction: transaction.clone(),
        })
    }

    /// One history line, e.g.
    /// `2024-01-01 09:30:00  income set       ₦0.00 -> ₦100.00`
    pub fn describe(&self, currency_symbol: &str) -> String {
        let detail = match &self.event {
            BudgetEvent::IncomeSet { previous, current } => format!(
                "{} -> {}",
                previous.format_with_symbol(currency_symbol),
                current.format_with_symbol(currency_symbol)
            ),
            BudgetEvent::ExpenseAdded { transaction }
            | BudgetEvent::ExpenseDeleted { transaction } => format!(
                "#{} {} {} on {}",
                transaction.id,
                transaction.category,
                transaction.amount.format_with_symbol(currency_symbol),
                transaction.date.format(DATE_FORMAT)
            ),
        };

        format!(
            "{}  {:<16} {}",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            self.event.label(),
            detail
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId};

    fn food(id: i64) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            NewTransaction::parse("Food", "12.5", "2024-01-01").unwrap(),
        )
    }

    #[test]
    fn test_income_line() {
        let entry = AuditEntry::income_set(Money::zero(), Money::from_cents(10000));
        let line = entry.describe("₦");

        assert!(line.contains("income set"));
        assert!(line.ends_with("₦0.00 -> ₦100.00"));
    }

    #[test]
    fn test_expense_lines() {
        let added = AuditEntry::expense_added(&food(7)).describe("$");
        assert!(added.contains("expense added"));
        assert!(added.ends_with("#7 Food $12.50 on 2024-01-01"));

        let deleted = AuditEntry::expense_deleted(&food(7)).describe("$");
        assert!(deleted.contains("expense deleted"));
    }

    #[test]
    fn test_json_line_shape() {
        let entry = AuditEntry::income_set(Money::from_cents(-1250), Money::from_cents(5000));
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["event"]["kind"], "income_set");
        assert_eq!(value["event"]["previous"], -12.5);
        assert_eq!(value["event"]["current"], 50.0);

        let back: AuditEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_expense_round_trips() {
        let entry = AuditEntry::expense_deleted(&food(42));
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains("\"kind\":\"expense_deleted\""));
        assert!(line.contains("\"category\":\"Food\""));

        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.event, BudgetEvent::ExpenseDeleted { transaction: food(42) });
    }
}
