//! Value comparison for table ordering.
//!
//! The base comparison orders values **descending**; ascending order is its
//! negation (see [`Direction::apply`]). Nulls are the one exception: they
//! sort after every defined value in both directions.

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use icu::collator::options::CollatorOptions;
use icu::collator::options::Strength;
use icu::collator::preferences::CollationNumericOrdering;
use icu::collator::Collator;
use icu::collator::CollatorBorrowed;
use icu::collator::CollatorPreferences;
use ledger_model::Value;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::Direction;

/// Options that change how values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareOptions {
    /// Compare two strings by timestamp when both parse as ISO dates.
    pub parse_date_strings: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            parse_date_strings: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Exact(Decimal),
    Float(f64),
}

impl Number {
    fn to_f64(self) -> f64 {
        match self {
            Number::Exact(d) => d.to_f64().unwrap_or(f64::NAN),
            Number::Float(f) => f,
        }
    }

    fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Exact(a), Number::Exact(b)) => a.cmp(&b),
            (a, b) => a
                .to_f64()
                .partial_cmp(&b.to_f64())
                .unwrap_or(Ordering::Equal),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum KeyKind {
    Null,
    Number(Number),
    Date(DateTime<Utc>),
    Text { date: Option<DateTime<Utc>> },
}

/// A row's sort key for one column, extracted once per sort.
///
/// Keeps the typed form of the value next to its display text, which is what
/// mixed-type pairs fall back to.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    kind: KeyKind,
    text: String,
}

impl SortKey {
    /// Builds the sort key for a value.
    pub fn new(value: &Value, options: &CompareOptions) -> Self {
        let kind = match value {
            Value::Null => KeyKind::Null,
            Value::Float(f) if f.is_nan() => KeyKind::Null,
            Value::Float(f) => KeyKind::Number(Number::Float(*f)),
            Value::Int(n) => KeyKind::Number(Number::Exact(Decimal::from(*n))),
            Value::Long(n) => KeyKind::Number(Number::Exact(Decimal::from(*n))),
            Value::Decimal(d) => KeyKind::Number(Number::Exact(*d)),
            Value::Money(m) => KeyKind::Number(Number::Exact(m.value())),
            Value::DateTime(dt) => KeyKind::Date(*dt),
            Value::Date(d) => KeyKind::Date(midnight_utc(*d)),
            Value::String(s) if options.parse_date_strings => KeyKind::Text {
                date: parse_iso_timestamp(s),
            },
            _ => KeyKind::Text { date: None },
        };

        let text = match kind {
            KeyKind::Null => String::new(),
            _ => value.to_string(),
        };

        Self { kind, text }
    }

    /// Returns `true` if this key sorts as null.
    pub fn is_null(&self) -> bool {
        self.kind == KeyKind::Null
    }

    /// Compares two keys in the given direction, nulls last.
    pub fn compare(&self, other: &SortKey, direction: Direction) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => direction.apply(self.descending_cmp(other)),
        }
    }

    /// Base comparison: larger values first. Neither key may be null.
    fn descending_cmp(&self, other: &SortKey) -> Ordering {
        match (&self.kind, &other.kind) {
            (KeyKind::Number(a), KeyKind::Number(b)) => b.compare(*a),
            (KeyKind::Date(a), KeyKind::Date(b))
            | (KeyKind::Date(a), KeyKind::Text { date: Some(b) })
            | (KeyKind::Text { date: Some(a) }, KeyKind::Date(b))
            | (KeyKind::Text { date: Some(a) }, KeyKind::Text { date: Some(b) }) => b.cmp(a),
            _ => text_cmp(&other.text, &self.text),
        }
    }
}

/// Compares two values in the given direction with default options.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use ledger_table::{Direction, Value};
/// use ledger_table::compare::compare_values;
///
/// let a = Value::from("item2");
/// let b = Value::from("item10");
/// assert_eq!(compare_values(&a, &b, Direction::Ascending), Ordering::Less);
/// assert_eq!(compare_values(&Value::Null, &b, Direction::Descending), Ordering::Greater);
/// ```
pub fn compare_values(a: &Value, b: &Value, direction: Direction) -> Ordering {
    compare_values_with(a, b, direction, &CompareOptions::default())
}

/// Compares two values in the given direction.
pub fn compare_values_with(
    a: &Value,
    b: &Value,
    direction: Direction,
    options: &CompareOptions,
) -> Ordering {
    SortKey::new(a, options).compare(&SortKey::new(b, options), direction)
}

thread_local! {
    static COLLATOR: Option<CollatorBorrowed<'static>> = text_collator();
}

/// Root-locale collator with numeric ordering, ignoring case.
fn text_collator() -> Option<CollatorBorrowed<'static>> {
    let mut prefs = CollatorPreferences::default();
    prefs.numeric_ordering = Some(CollationNumericOrdering::True);

    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Secondary);

    match Collator::try_new(prefs, options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            log::warn!("text collator unavailable, comparing lowercase text: {}", err);
            None
        }
    }
}

/// Locale-aware, case-insensitive string comparison that orders digit runs
/// by number.
///
/// `"item2"` sorts before `"item10"`, `"Apple"` equals `"apple"`, and
/// `"Éclair"` sorts among the `e`s.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use ledger_table::compare::text_cmp;
///
/// assert_eq!(text_cmp("item2", "item10"), Ordering::Less);
/// assert_eq!(text_cmp("Éclair", "orange"), Ordering::Less);
/// ```
pub fn text_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Parses an ISO 8601 date or date-time string as a UTC timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC) and
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_iso_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(midnight_utc)
}
