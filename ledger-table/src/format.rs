//! Cell formatters.
//!
//! A column's formatter turns the value it extracted from a row into the
//! text shown in the cell. Formatters never influence ordering.

use std::fmt::Write;
use std::str::FromStr;

use ledger_model::Value;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::Deserialize;
use serde::Serialize;

use crate::compare::parse_iso_timestamp;

/// Horizontal alignment for cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Digit grouping convention for amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberingSystem {
    /// Thousands, millions, billions: `1,234,567`.
    #[default]
    International,
    /// Thousands, lakhs, crores: `12,34,567`.
    Indian,
}

/// Text to show in a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayValue {
    /// Cell text.
    pub text: String,
    /// Cell alignment.
    pub align: Alignment,
}

impl DisplayValue {
    /// Creates left-aligned cell text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Alignment::Left,
        }
    }

    /// Sets the alignment.
    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

impl From<String> for DisplayValue {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for DisplayValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl std::fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Renders a column value for display.
///
/// Closures taking `(&Value, &T)` implement this trait, so a one-off
/// renderer does not need its own type:
///
/// ```
/// use ledger_model::Record;
/// use ledger_table::{Column, DisplayValue, Value};
///
/// let status = Column::field("active", "Status").formatter(|value: &Value, _row: &Record| {
///     match value {
///         Value::Bool(true) => DisplayValue::new("Active"),
///         _ => DisplayValue::new("Inactive"),
///     }
/// });
/// assert_eq!(status.render(&Record::new().set("active", true)).text, "Active");
/// ```
pub trait Formatter<T>: Send + Sync {
    /// Formats the value extracted from `row`.
    fn format(&self, value: &Value, row: &T) -> DisplayValue;
}

impl<T, F> Formatter<T> for F
where
    F: Fn(&Value, &T) -> DisplayValue + Send + Sync,
{
    fn format(&self, value: &Value, row: &T) -> DisplayValue {
        self(value, row)
    }
}

/// Shows the value's display form, empty for null.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl<T> Formatter<T> for PlainFormatter {
    fn format(&self, value: &Value, _row: &T) -> DisplayValue {
        DisplayValue::new(value.to_string())
    }
}

/// Formats dates and timestamps with a chrono pattern.
///
/// ISO date strings are formatted too; anything else is shown as is.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
}

impl DateFormatter {
    /// Creates a formatter for the given strftime pattern, e.g. `"%d-%m-%Y"`.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Formats as `DD-MM-YYYY`.
    pub fn day_month_year() -> Self {
        Self::new("%d-%m-%Y")
    }
}

impl<T> Formatter<T> for DateFormatter {
    fn format(&self, value: &Value, row: &T) -> DisplayValue {
        let mut out = String::new();
        let written = match value {
            Value::DateTime(dt) => write!(out, "{}", dt.format(&self.pattern)),
            Value::Date(d) => write!(out, "{}", d.format(&self.pattern)),
            Value::String(s) => match parse_iso_timestamp(s) {
                Some(dt) => write!(out, "{}", dt.format(&self.pattern)),
                None => return PlainFormatter.format(value, row),
            },
            _ => return PlainFormatter.format(value, row),
        };

        // An invalid pattern surfaces as a fmt error rather than a panic.
        match written {
            Ok(()) => DisplayValue::new(out),
            Err(_) => {
                log::warn!("invalid date pattern '{}'", self.pattern);
                PlainFormatter.format(value, row)
            }
        }
    }
}

/// Formats amounts with fixed decimals and digit grouping.
///
/// # Example
///
/// ```
/// use ledger_model::Record;
/// use ledger_table::format::{MoneyFormatter, NumberingSystem};
/// use ledger_table::{Formatter, Value};
///
/// let inr = MoneyFormatter::new(2).system(NumberingSystem::Indian).symbol("₹");
/// let cell = inr.format(&Value::from(1234567.5), &Record::new());
/// assert_eq!(cell.text, "₹12,34,567.50");
/// ```
#[derive(Debug, Clone)]
pub struct MoneyFormatter {
    decimals: u32,
    symbol: Option<String>,
    system: NumberingSystem,
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl MoneyFormatter {
    /// Creates a formatter with the given number of decimals.
    pub fn new(decimals: u32) -> Self {
        Self {
            decimals,
            symbol: None,
            system: NumberingSystem::International,
        }
    }

    /// Sets the currency symbol placed before the digits.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the digit grouping convention.
    pub fn system(mut self, system: NumberingSystem) -> Self {
        self.system = system;
        self
    }

    /// Formats a decimal amount.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded =
            amount.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.*}", self.decimals as usize, rounded.abs());

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::new();
        if negative {
            out.push('-');
        }
        if let Some(symbol) = &self.symbol {
            out.push_str(symbol);
        }
        out.push_str(&group_digits(whole, self.system));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl<T> Formatter<T> for MoneyFormatter {
    fn format(&self, value: &Value, row: &T) -> DisplayValue {
        match decimal_of(value) {
            Some(amount) => DisplayValue::new(self.format_amount(amount)).aligned(Alignment::Right),
            None => PlainFormatter.format(value, row),
        }
    }
}

/// Reads a numeric value (or a numeric string) as a decimal.
pub(crate) fn decimal_of(value: &Value) -> Option<Decimal> {
    match value {
        Value::Int(n) => Some(Decimal::from(*n)),
        Value::Long(n) => Some(Decimal::from(*n)),
        Value::Float(f) => Decimal::try_from(*f).ok(),
        Value::Decimal(d) => Some(*d),
        Value::Money(m) => Some(m.value()),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Inserts group separators into a run of ASCII digits.
pub(crate) fn group_digits(digits: &str, system: NumberingSystem) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match system {
        NumberingSystem::International => 3,
        NumberingSystem::Indian => 2,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("999", NumberingSystem::Indian), "999");
        assert_eq!(group_digits("1234567", NumberingSystem::International), "1,234,567");
        assert_eq!(group_digits("1234567", NumberingSystem::Indian), "12,34,567");
        assert_eq!(group_digits("123456789", NumberingSystem::Indian), "12,34,56,789");
        assert_eq!(group_digits("100000", NumberingSystem::International), "100,000");
    }

    #[test]
    fn test_money_formatter() {
        let f = MoneyFormatter::new(2).symbol("$");
        assert_eq!(f.format_amount(Decimal::new(-1234565, 3)), "-$1,234.57");
        assert_eq!(f.format_amount(Decimal::ZERO), "$0.00");
        assert_eq!(f.format_amount(Decimal::new(-1, 3)), "$0.00");

        let whole = MoneyFormatter::new(0);
        assert_eq!(whole.format_amount(Decimal::new(25005, 1)), "2,501");
    }

    #[test]
    fn test_money_formatter_falls_back_for_text() {
        let f = MoneyFormatter::default();
        let cell = f.format(&Value::from("n/a"), &());
        assert_eq!(cell, DisplayValue::new("n/a"));

        let cell = f.format(&Value::from(" 1500.5 "), &());
        assert_eq!(cell, DisplayValue::new("1,500.50").aligned(Alignment::Right));
    }

    #[test]
    fn test_date_formatter() {
        let f = DateFormatter::day_month_year();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(f.format(&Value::Date(date), &()).text, "09-03-2024");
        assert_eq!(f.format(&Value::from("2024-03-09T18:30:00Z"), &()).text, "09-03-2024");
        assert_eq!(f.format(&Value::from("soon"), &()).text, "soon");
        assert_eq!(f.format(&Value::Null, &()).text, "");
    }

    #[test]
    fn test_date_formatter_invalid_pattern() {
        let f = DateFormatter::new("%Q");
        assert_eq!(f.format(&Value::from("2024-03-09"), &()).text, "2024-03-09");
    }
}
