//! Encoding of the values kept under each storage key
//!
//! Decoding never fails: absent or malformed values fall back to their
//! defaults (zero income, no transactions).

use std::collections::HashSet;

use crate::error::BudgetResult;
use crate::models::{Money, Transaction};

/// Encode income as a decimal string
pub fn encode_income(income: Money) -> String {
    income.to_string()
}

/// Decode a stored income value, defaulting to zero
pub fn decode_income(raw: Option<&str>) -> Money {
    raw.and_then(|s| Money::parse(s).ok()).unwrap_or_default()
}

/// Encode the transaction list as a JSON array, in list order
pub fn encode_transactions(transactions: &[Transaction]) -> BudgetResult<String> {
    Ok(serde_json::to_string(transactions)?)
}

/// Decode a stored transaction list
///
/// Anything that is not a JSON array yields an empty list. Inside the array,
/// records that do not describe a valid transaction are dropped, as are
/// records repeating an id already seen earlier in the list.
pub fn decode_transactions(raw: Option<&str>) -> Vec<Transaction> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let Ok(items) = serde_json::from_str::<Vec<serde_json::Value>>(raw) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Transaction>(item).ok())
        .filter(|txn| txn.validate().is_ok())
        .filter(|txn| seen.insert(txn.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId};

    fn txn(id: i64, category: &str, amount: &str, date: &str) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            NewTransaction::parse(category, amount, date).unwrap(),
        )
    }

    #[test]
    fn test_income_defaults() {
        assert_eq!(decode_income(None), Money::zero());
        assert_eq!(decode_income(Some("")), Money::zero());
        assert_eq!(decode_income(Some("NaN")), Money::zero());
        assert_eq!(decode_income(Some("abc")), Money::zero());
    }

    #[test]
    fn test_income_values() {
        assert_eq!(decode_income(Some("100")), Money::from_cents(10000));
        assert_eq!(decode_income(Some("-12.5")), Money::from_cents(-1250));
        assert_eq!(encode_income(Money::from_cents(-1250)), "-12.50");
    }

    #[test]
    fn test_transactions_round_trip_in_order() {
        let list = vec![
            txn(3, "Transport", "5", "2024-01-03"),
            txn(1, "Food", "10.25", "2024-01-01"),
            txn(2, "Food", "15", "2024-01-02"),
        ];

        let encoded = encode_transactions(&list).unwrap();
        assert_eq!(decode_transactions(Some(&encoded)), list);
    }

    #[test]
    fn test_transactions_defaults() {
        assert!(decode_transactions(None).is_empty());
        assert!(decode_transactions(Some("")).is_empty());
        assert!(decode_transactions(Some("null")).is_empty());
        assert!(decode_transactions(Some("{\"id\": 1}")).is_empty());
        assert!(decode_transactions(Some("[oops")).is_empty());
    }

    #[test]
    fn test_bad_records_are_dropped() {
        let raw = r#"[
            {"id": 1, "category": "Food", "amount": 10, "date": "2024-01-01"},
            {"id": 2, "category": "", "amount": 10, "date": "2024-01-01"},
            {"id": 3, "category": "Food", "amount": -4, "date": "2024-01-01"},
            {"id": 4, "category": "Food", "amount": 4, "date": "yesterday"},
            {"id": 1, "category": "Dup", "amount": 4, "date": "2024-01-01"},
            {"category": "No id", "amount": 4, "date": "2024-01-01"},
            {"id": 5, "category": "Rent", "amount": 400.5, "date": "2024-01-05"}
        ]"#;

        let list = decode_transactions(Some(raw));
        let ids: Vec<i64> = list.iter().map(|t| t.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(list[1].amount, Money::from_cents(40050));
    }
}
