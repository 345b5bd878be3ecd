//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest magnitude, in cents, that parsing accepts (ten trillion units)
///
/// Amounts up to this bound survive the decimal JSON encoding exactly, and
/// thousands of them can be summed without leaving `i64`.
pub const MAX_ABS_CENTS: i64 = 1_000_000_000_000_000;

/// Currency glyphs accepted (and ignored) in front of an amount when parsing
const CURRENCY_GLYPHS: [&str; 2] = ["$", "₦"];

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents keeps totals exact no matter how many transactions are
/// summed, and supports both positive and negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Convert a decimal number (as found in persisted JSON) to Money,
    /// rounding to the nearest cent. Returns `None` for NaN, infinities and
    /// magnitudes above [`MAX_ABS_CENTS`].
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > MAX_ABS_CENTS as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number, for the persisted wire format
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "10.50", "-10.50", "+10", "$10.50", "₦10.50", ".5" and "10.".
    /// Digits past the second decimal place round half away from zero.
    /// Magnitudes above [`MAX_ABS_CENTS`] are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let rest = CURRENCY_GLYPHS
            .iter()
            .find_map(|glyph| rest.strip_prefix(glyph))
            .unwrap_or(rest);

        let (whole, fraction) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::OutOfRange(trimmed.to_string()))?
        };

        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(|| MoneyParseError::OutOfRange(trimmed.to_string()))?;
        if cents > MAX_ABS_CENTS {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Whether the amount lies within ±[`MAX_ABS_CENTS`]
    pub const fn is_within_bounds(self) -> bool {
        self.0 >= -MAX_ABS_CENTS && self.0 <= MAX_ABS_CENTS
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain two-decimal form, e.g. `10.50` or `-3.05`. This is also the form
/// income is persisted in.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

/// Operators saturate at the `i64` bounds instead of wrapping or panicking.
/// `BudgetStore` refuses mutations whose totals would need to saturate.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Serde adapter that writes Money as a plain decimal number (`12.5`) and
/// reads any JSON number back, rounding to the nearest cent
pub mod decimal {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Money;

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(amount.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount too large: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_cents_units_split() {
        assert_eq!(Money::from_cents(-1050).units(), -10);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(2500).format_with_symbol("₦"), "₦25.00");
        assert_eq!(Money::from_cents(-5000).format_with_symbol("₦"), "-₦50.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("₦10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("+7").unwrap().cents(), 700);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse("  42  ").unwrap().cents(), 4200);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse("1.004").unwrap().cents(), 100);
        assert_eq!(Money::parse("-1.005").unwrap().cents(), -101);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12abc").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_decimal_conversion() {
        assert_eq!(Money::from_decimal(12.5), Some(Money::from_cents(1250)));
        assert_eq!(Money::from_decimal(0.07), Some(Money::from_cents(7)));
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_cents(1999).to_decimal(), 19.99);

        let m = Money::from_cents(123_456);
        assert_eq!(Money::from_decimal(m.to_decimal()), Some(m));
    }

    #[test]
    fn test_parse_rejects_amounts_above_bound() {
        let max = Money::parse("10000000000000").unwrap();
        assert_eq!(max.cents(), MAX_ABS_CENTS);
        assert_eq!(Money::parse("-10000000000000").unwrap().cents(), -MAX_ABS_CENTS);

        assert!(matches!(
            Money::parse("10000000000000.01"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("90000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999.99"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_from_decimal_rejects_amounts_above_bound() {
        assert_eq!(Money::from_decimal(1e13), Some(Money::from_cents(MAX_ABS_CENTS)));
        assert_eq!(Money::from_decimal(1e13 + 0.01), None);
        assert_eq!(Money::from_decimal(-1e17), None);
    }

    #[test]
    fn test_decimal_json_exact_up_to_bound() {
        #[derive(Serialize, Deserialize)]
        struct Wrapped(#[serde(with = "decimal")] Money);

        for cents in [
            MAX_ABS_CENTS,
            MAX_ABS_CENTS - 1,
            -MAX_ABS_CENTS,
            999_999_999_999_999,
            123_456_789_012_345,
            1,
        ] {
            let json = serde_json::to_string(&Wrapped(Money::from_cents(cents))).unwrap();
            let back: Wrapped = serde_json::from_str(&json).unwrap();
            assert_eq!(back.0.cents(), cents, "{}", json);
        }
    }

    #[test]
    fn test_operators_saturate() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((-max - Money::from_cents(10)).cents(), i64::MIN);
        assert!(!(max + Money::from_cents(1)).is_within_bounds());
        assert!(Money::from_cents(-MAX_ABS_CENTS).is_within_bounds());
        assert!(!Money::from_cents(MAX_ABS_CENTS + 1).is_within_bounds());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Money::from_cents(1000));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }
}
