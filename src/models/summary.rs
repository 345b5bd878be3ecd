//! Derived aggregates
//!
//! Category totals and the per-render snapshot. Nothing here is stored;
//! everything is recomputed from the transaction list.

use serde::Serialize;

use super::money::Money;
use super::transaction::Transaction;

/// Total spent in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of transactions in the category
    pub count: usize,
}

/// Group transactions by category, in the order each category first appears
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in transactions {
        match totals.iter_mut().find(|t| t.category == txn.category) {
            Some(entry) => {
                entry.total += txn.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
                count: 1,
            }),
        }
    }

    totals
}

/// Everything a view needs for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSnapshot {
    pub income: Money,
    pub transactions: Vec<Transaction>,
    pub total_expenses: Money,
    pub balance: Money,
    pub category_totals: Vec<CategoryTotal>,
    pub over_budget: bool,
}
