//! Transaction model
//!
//! A transaction is a single recorded expense: a category, a positive amount
//! and the calendar date it happened on. Transactions are created and
//! deleted but never edited in place.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::ids::TransactionId;
use super::money::{self, Money, MoneyParseError, MAX_ABS_CENTS};

/// Date format used for transaction dates at every boundary (storage, CLI, TUI)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render `date` with a strftime `pattern`, or `None` when the pattern is
/// malformed or asks for fields a date does not have (`%Q`, `%H`, ...)
pub fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}

/// Render `date` with `pattern`, falling back to `DATE_FORMAT`
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    try_format_date(date, pattern).unwrap_or_else(|| date.format(DATE_FORMAT).to_string())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyCategory,
    InvalidAmount(String),
    NonPositiveAmount,
    AmountTooLarge,
    MissingDate,
    InvalidDate(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::InvalidAmount(raw) => write!(f, "Amount is not a number: '{}'", raw),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::AmountTooLarge => write!(
                f,
                "Amount must not exceed {}",
                Money::from_cents(MAX_ABS_CENTS)
            ),
            Self::MissingDate => write!(f, "Date cannot be empty"),
            Self::InvalidDate(raw) => {
                write!(f, "Date must be a calendar date (YYYY-MM-DD): '{}'", raw)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

/// A recorded expense
///
/// The serialized form is the persisted wire format:
/// `{"id": 1704067200000, "category": "Food", "amount": 12.5, "date": "2024-01-01"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, derived from the creation time
    pub id: TransactionId,

    /// Spending category (free text, trimmed)
    pub category: String,

    /// Amount spent, always positive
    #[serde(with = "money::decimal")]
    pub amount: Money,

    /// Date of the expense
    pub date: NaiveDate,
}

impl Transaction {
    /// Build a transaction from already-validated input
    pub fn new(id: TransactionId, input: NewTransaction) -> Self {
        Self {
            id,
            category: input.category,
            amount: input.amount,
            date: input.date,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        check_amount(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format(DATE_FORMAT),
            self.category,
            self.amount
        )
    }
}

fn check_amount(amount: Money) -> Result<(), TransactionValidationError> {
    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount);
    }
    if amount.cents() > MAX_ABS_CENTS {
        return Err(TransactionValidationError::AmountTooLarge);
    }
    Ok(())
}

/// Validated input for creating a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub category: String,
    pub amount: Money,
    pub date: NaiveDate,
}

impl NewTransaction {
    /// Validate typed input. The category is trimmed.
    pub fn new(
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Result<Self, TransactionValidationError> {
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        check_amount(amount)?;
        Ok(Self {
            category,
            amount,
            date,
        })
    }

    /// Parse and validate raw form input
    ///
    /// Checks run in field order (category, amount, date) so the first
    /// problem the user would see on the form is the one reported.
    pub fn parse(
        category: &str,
        amount: &str,
        date: &str,
    ) -> Result<Self, TransactionValidationError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        let amount = amount.trim();
        let amount = Money::parse(amount).map_err(|e| match e {
            MoneyParseError::OutOfRange(_) => TransactionValidationError::AmountTooLarge,
            MoneyParseError::InvalidFormat(_) => {
                TransactionValidationError::InvalidAmount(amount.to_string())
            }
        })?;
        check_amount(amount)?;

        let date = date.trim();
        if date.is_empty() {
            return Err(TransactionValidationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| TransactionValidationError::InvalidDate(date.to_string()))?;

        Self::new(category, amount, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_input() {
        let input = NewTransaction::parse("  Food ", "20", "2024-01-01").unwrap();
        assert_eq!(input.category, "Food");
        assert_eq!(input.amount, Money::from_cents(2000));
        assert_eq!(input.date, date(2024, 1, 1));
    }

    #[test]
    fn test_parse_rejects_blank_category() {
        assert_eq!(
            NewTransaction::parse("   ", "10", "2024-01-01"),
            Err(TransactionValidationError::EmptyCategory)
        );
    }

    #[test]
    fn test_parse_rejects_non_positive_amounts() {
        assert_eq!(
            NewTransaction::parse("Food", "-5", "2024-01-01"),
            Err(TransactionValidationError::NonPositiveAmount)
        );
        assert_eq!(
            NewTransaction::parse("Food", "0", "2024-01-01"),
            Err(TransactionValidationError::NonPositiveAmount)
        );
        assert_eq!(
            NewTransaction::parse("Food", "0.001", "2024-01-01"),
            Err(TransactionValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_amount() {
        assert!(matches!(
            NewTransaction::parse("Food", "lots", "2024-01-01"),
            Err(TransactionValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            NewTransaction::parse("Food", "", "2024-01-01"),
            Err(TransactionValidationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_rejects_amounts_above_bound() {
        assert_eq!(
            NewTransaction::parse("Food", "90000000000000000", "2024-01-01"),
            Err(TransactionValidationError::AmountTooLarge)
        );
        assert_eq!(
            NewTransaction::new("Food", Money::from_cents(MAX_ABS_CENTS + 1), date(2024, 1, 1)),
            Err(TransactionValidationError::AmountTooLarge)
        );
        assert!(NewTransaction::parse("Food", "10000000000000", "2024-01-01").is_ok());
    }

    #[test]
    fn test_parse_rejects_missing_or_bad_date() {
        assert_eq!(
            NewTransaction::parse("Food", "5", "  "),
            Err(TransactionValidationError::MissingDate)
        );
        assert!(matches!(
            NewTransaction::parse("Food", "5", "2024-02-30"),
            Err(TransactionValidationError::InvalidDate(_))
        ));
        assert!(matches!(
            NewTransaction::parse("Food", "5", "01/02/2024"),
            Err(TransactionValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_new_validates_typed_input() {
        assert!(NewTransaction::new("Rent", Money::from_cents(100), date(2024, 1, 1)).is_ok());
        assert_eq!(
            NewTransaction::new("", Money::from_cents(100), date(2024, 1, 1)),
            Err(TransactionValidationError::EmptyCategory)
        );
        assert_eq!(
            NewTransaction::new("Rent", Money::from_cents(-1), date(2024, 1, 1)),
            Err(TransactionValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_wire_format() {
        let input = NewTransaction::parse("Food", "12.5", "2024-01-01").unwrap();
        let txn = Transaction::new(TransactionId::from_raw(1_704_067_200_000), input);

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1_704_067_200_000_i64,
                "category": "Food",
                "amount": 12.5,
                "date": "2024-01-01"
            })
        );

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_reads_integer_amounts() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id": 1, "category": "Transport", "amount": 20, "date": "2024-03-09"}"#,
        )
        .unwrap();
        assert_eq!(txn.amount, Money::from_cents(2000));
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_bad_stored_records() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id": 1, "category": " ", "amount": 3, "date": "2024-03-09"}"#,
        )
        .unwrap();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyCategory));
    }

    #[test]
    fn test_format_date_patterns() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(format_date(date, "%d/%m/%Y"), "15/01/2024");
        assert_eq!(try_format_date(date, "%Q"), None);
        assert_eq!(try_format_date(date, "%H:%M"), None);
        assert_eq!(format_date(date, "%Q"), "2024-01-15");
        assert_eq!(format_date(date, "%"), "2024-01-15");
    }
}
