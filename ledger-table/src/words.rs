//! Amounts spelled out in words, as printed on vouchers and cheques.

use ledger_model::Value;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;

use crate::TableError;
use crate::format::{Alignment, DisplayValue, Formatter, NumberingSystem, PlainFormatter, decimal_of};

/// Largest whole amount that can be spelled out.
const MAX_WHOLE: u64 = 999_999_999_999_999;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const INTERNATIONAL_SCALES: [(u64, &str); 4] = [
    (1_000_000_000_000, "Trillion"),
    (1_000_000_000, "Billion"),
    (1_000_000, "Million"),
    (1_000, "Thousand"),
];

const INDIAN_SCALES: [(u64, &str); 3] = [(10_000_000, "Crore"), (100_000, "Lakh"), (1_000, "Thousand")];

/// Spells out currency amounts.
///
/// # Example
///
/// ```
/// use ledger_table::AmountInWords;
/// use rust_decimal::Decimal;
///
/// let words = AmountInWords::indian().to_words(Decimal::new(123450, 2)).unwrap();
/// assert_eq!(
///     words,
///     "One Thousand Two Hundred Thirty Four Rupees and Fifty Paise Only"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AmountInWords {
    system: NumberingSystem,
    major_unit: String,
    minor_unit: String,
}

impl AmountInWords {
    /// Indian numbering (lakh, crore) in rupees and paise.
    pub fn indian() -> Self {
        Self {
            system: NumberingSystem::Indian,
            major_unit: "Rupees".to_string(),
            minor_unit: "Paise".to_string(),
        }
    }

    /// International numbering (million, billion) in dollars and cents.
    pub fn international() -> Self {
        Self {
            system: NumberingSystem::International,
            major_unit: "Dollars".to_string(),
            minor_unit: "Cents".to_string(),
        }
    }

    /// Replaces the currency unit names.
    pub fn with_units(mut self, major: impl Into<String>, minor: impl Into<String>) -> Self {
        self.major_unit = major.into();
        self.minor_unit = minor.into();
        self
    }

    /// Spells out an amount, rounded to two decimals.
    pub fn to_words(&self, amount: Decimal) -> Result<String, TableError> {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let absolute = rounded.abs();
        let whole = absolute
            .trunc()
            .to_u64()
            .filter(|whole| *whole <= MAX_WHOLE)
            .ok_or(TableError::AmountOutOfRange { amount })?;
        let minor = ((absolute - absolute.trunc()) * Decimal::ONE_HUNDRED)
            .to_u64()
            .unwrap_or(0);

        let mut out = String::new();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push_str("Minus ");
        }
        if whole == 0 {
            out.push_str("Zero");
        } else {
            out.push_str(&spell(whole, self.system));
        }
        out.push(' ');
        out.push_str(&self.major_unit);
        if minor > 0 {
            out.push_str(" and ");
            out.push_str(&spell(minor, self.system));
            out.push(' ');
            out.push_str(&self.minor_unit);
        }
        out.push_str(" Only");
        Ok(out)
    }
}

impl<T> Formatter<T> for AmountInWords {
    fn format(&self, value: &Value, row: &T) -> DisplayValue {
        let Some(amount) = decimal_of(value) else {
            return PlainFormatter.format(value, row);
        };
        match self.to_words(amount) {
            Ok(words) => DisplayValue::new(words).aligned(Alignment::Left),
            Err(e) => {
                log::warn!("{}", e);
                PlainFormatter.format(value, row)
            }
        }
    }
}

/// Spells out a positive number. Zero yields an empty string.
fn spell(n: u64, system: NumberingSystem) -> String {
    let scales: &[(u64, &str)] = match system {
        NumberingSystem::International => &INTERNATIONAL_SCALES,
        NumberingSystem::Indian => &INDIAN_SCALES,
    };

    let mut parts = Vec::new();
    let mut rest = n;
    for &(size, name) in scales {
        if rest >= size {
            parts.push(format!("{} {}", spell(rest / size, system), name));
            rest %= size;
        }
    }
    if rest > 0 {
        parts.push(below_thousand(rest));
    }
    parts.join(" ")
}

fn below_thousand(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} Hundred", ONES[hundreds]));
    }
    if rest >= 20 {
        parts.push(TENS[rest / 10].to_string());
        if rest % 10 > 0 {
            parts.push(ONES[rest % 10].to_string());
        }
    } else if rest > 0 {
        parts.push(ONES[rest].to_string());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indian(amount: i64, scale: u32) -> String {
        AmountInWords::indian()
            .to_words(Decimal::new(amount, scale))
            .unwrap()
    }

    fn international(amount: i64, scale: u32) -> String {
        AmountInWords::international()
            .to_words(Decimal::new(amount, scale))
            .unwrap()
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(indian(0, 0), "Zero Rupees Only");
        assert_eq!(indian(7, 0), "Seven Rupees Only");
        assert_eq!(indian(19, 0), "Nineteen Rupees Only");
        assert_eq!(indian(40, 0), "Forty Rupees Only");
        assert_eq!(indian(101, 0), "One Hundred One Rupees Only");
    }

    #[test]
    fn test_indian_scales() {
        assert_eq!(indian(100_000, 0), "One Lakh Rupees Only");
        assert_eq!(
            indian(12_34_567, 0),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees Only"
        );
        assert_eq!(indian(2_50_00_000, 0), "Two Crore Fifty Lakh Rupees Only");
    }

    #[test]
    fn test_international_scales() {
        assert_eq!(
            international(1_234_567, 0),
            "One Million Two Hundred Thirty Four Thousand Five Hundred Sixty Seven Dollars Only"
        );
        assert_eq!(international(3_000_000_000, 0), "Three Billion Dollars Only");
    }

    #[test]
    fn test_fractions_and_sign() {
        assert_eq!(indian(5, 2), "Zero Rupees and Five Paise Only");
        assert_eq!(indian(-99_994, 3), "Minus Ninety Nine Rupees and Ninety Nine Paise Only");
        assert_eq!(international(1999, 3), "Two Dollars Only");
    }

    #[test]
    fn test_custom_units() {
        let words = AmountInWords::international()
            .with_units("Euros", "Cents")
            .to_words(Decimal::new(2001, 2))
            .unwrap();
        assert_eq!(words, "Twenty Euros and One Cents Only");
    }

    #[test]
    fn test_out_of_range() {
        let err = AmountInWords::indian()
            .to_words(Decimal::from(u64::MAX))
            .unwrap_err();
        assert!(matches!(err, TableError::AmountOutOfRange { .. }));
    }

    #[test]
    fn test_formatter_falls_back_to_plain() {
        let f = AmountInWords::indian();
        assert_eq!(f.format(&Value::from("n/a"), &()).text, "n/a");
        assert_eq!(f.format(&Value::from(2), &()).text, "Two Rupees Only");
        let huge = Value::Decimal(Decimal::from(u64::MAX));
        assert_eq!(f.format(&huge, &()).text, u64::MAX.to_string());
    }
}
