//! Budget store
//!
//! Owns the income figure and the transaction list, applies mutations,
//! persists after every one of them, and derives the aggregates the views
//! render (total expenses, balance, category totals, over-budget flag).

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    category_totals, BudgetSnapshot, CategoryTotal, IdSequence, Money, MoneyParseError,
    NewTransaction, Transaction, TransactionId, MAX_ABS_CENTS,
};
use crate::storage::records::{
    decode_income, decode_transactions, encode_income, encode_transactions,
};
use crate::storage::{KeyValueStore, INCOME_KEY, TRANSACTIONS_KEY};

/// The budget: income plus an ordered list of expenses, backed by a
/// key-value store
pub struct BudgetStore<S: KeyValueStore> {
    backend: S,
    income: Money,
    transactions: Vec<Transaction>,
    ids: IdSequence,
    audit: Option<AuditLogger>,
}

impl<S: KeyValueStore> BudgetStore<S> {
    /// Load the budget from `backend`
    ///
    /// Never fails: values that are missing, unreadable or malformed are
    /// replaced by their defaults (zero income, no transactions).
    pub fn load(backend: S) -> Self {
        let income = decode_income(backend.get(INCOME_KEY).ok().flatten().as_deref());
        let transactions =
            decode_transactions(backend.get(TRANSACTIONS_KEY).ok().flatten().as_deref());

        let mut ids = IdSequence::new();
        for txn in &transactions {
            ids.observe(txn.id);
        }

        Self {
            backend,
            income,
            transactions,
            ids,
            audit: None,
        }
    }

    /// Record every mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Current income
    pub fn income(&self) -> Money {
        self.income
    }

    /// Current transactions, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by id
    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// The backing key-value store
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Replace the income and persist it. Negative values are accepted.
    pub fn set_income(&mut self, value: Money) -> BudgetResult<Money> {
        if !value.is_within_bounds() || !(value - self.total_expenses()).is_within_bounds() {
            return Err(BudgetError::Validation(format!(
                "Income must be between -{0} and {0}",
                Money::from_cents(MAX_ABS_CENTS)
            )));
        }
        let before = self.income;

        self.backend.set(INCOME_KEY, encode_income(value))?;
        self.income = value;

        self.log(|| AuditEntry::income_set(before, value))?;

        Ok(value)
    }

    /// Set income from raw form input; anything that is not a number is 0
    pub fn set_income_from_input(&mut self, raw: &str) -> BudgetResult<Money> {
        let value = match Money::parse(raw) {
            Ok(value) => value,
            Err(e @ MoneyParseError::OutOfRange(_)) => {
                return Err(BudgetError::Validation(e.to_string()))
            }
            Err(MoneyParseError::InvalidFormat(_)) => Money::zero(),
        };
        self.set_income(value)
    }

    /// Append a new expense and persist the list
    ///
    /// Either the transaction is appended and persisted, or the store is left
    /// exactly as it was.
    pub fn add_transaction(&mut self, input: NewTransaction) -> BudgetResult<Transaction> {
        let input = NewTransaction::new(input.category, input.amount, input.date)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let total = self.total_expenses() + input.amount;
        if !total.is_within_bounds() || !(self.income - total).is_within_bounds() {
            return Err(BudgetError::Validation(
                "Total expenses would exceed the supported range".into(),
            ));
        }

        let saved_ids = self.ids;
        let txn = Transaction::new(self.ids.next(), input);

        self.transactions.push(txn.clone());
        if let Err(e) = self.persist_transactions() {
            self.transactions.pop();
            self.ids = saved_ids;
            return Err(e);
        }

        self.log(|| AuditEntry::expense_added(&txn))?;

        Ok(txn)
    }

    /// Parse raw form input and add the resulting expense
    pub fn add_transaction_from_input(
        &mut self,
        category: &str,
        amount: &str,
        date: &str,
    ) -> BudgetResult<Transaction> {
        let input = NewTransaction::parse(category, amount, date)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.add_transaction(input)
    }

    /// Remove a transaction by id and persist the list
    ///
    /// An unknown id still re-persists the unchanged list and then reports
    /// `NotFound`, which callers can treat as a no-op.
    pub fn delete_transaction(&mut self, id: TransactionId) -> BudgetResult<Transaction> {
        let Some(index) = self.transactions.iter().position(|t| t.id == id) else {
            self.persist_transactions()?;
            return Err(BudgetError::transaction_not_found(id.to_string()));
        };

        let removed = self.transactions.remove(index);
        if let Err(e) = self.persist_transactions() {
            self.transactions.insert(index, removed);
            return Err(e);
        }

        self.log(|| AuditEntry::expense_deleted(&removed))?;

        Ok(removed)
    }

    /// Sum of all expense amounts; saturates only for stored lists whose
    /// total cannot be represented
    pub fn total_expenses(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Income minus total expenses; may be negative
    pub fn balance(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// Per-category totals in first-seen order
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        category_totals(&self.transactions)
    }

    /// Whether expenses exceed income
    pub fn is_over_budget(&self) -> bool {
        self.total_expenses() > self.income
    }

    /// Everything a view renders, computed in one pass
    pub fn snapshot(&self) -> BudgetSnapshot {
        let total_expenses = self.total_expenses();
        BudgetSnapshot {
            income: self.income,
            transactions: self.transactions.clone(),
            total_expenses,
            balance: self.income - total_expenses,
            category_totals: self.category_totals(),
            over_budget: total_expenses > self.income,
        }
    }

    fn persist_transactions(&mut self) -> BudgetResult<()> {
        let encoded = encode_transactions(&self.transactions)?;
        self.backend.set(TRANSACTIONS_KEY, encoded)
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> BudgetResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}
