//! Money type

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// A monetary amount represented as a decimal.
///
/// The currency itself is a property of the organization, not of the
/// amount, so only the value is carried here.
///
/// # Example
///
/// ```
/// use ledger_model::Money;
/// use rust_decimal::Decimal;
///
/// let total = Money::new(Decimal::new(1999, 2)); // 19.99
/// assert_eq!(total.to_string(), "19.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub Decimal);

impl Money {
    /// Creates a new Money value.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Creates a Money value from an integer (whole units).
    pub fn from_int(value: i64) -> Self {
        Self(Decimal::new(value, 0))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
