//! Value enum for dynamic field values

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::Money;

/// A dynamic value that a table column extracts from a row.
///
/// Row types of any shape hand their cells to the ordering engine as
/// `Value`s, so the engine can compare numbers as numbers, dates as
/// timestamps and everything else as text.
///
/// # Type Mapping
///
/// | JSON / source type    | Rust Variant |
/// |-----------------------|--------------|
/// | null, missing field   | `Null` |
/// | boolean               | `Bool` |
/// | 32-bit integer        | `Int` |
/// | integer               | `Long` |
/// | floating point        | `Float` |
/// | exact decimal         | `Decimal` |
/// | string                | `String` |
/// | record identifier     | `Guid` |
/// | timestamp             | `DateTime` |
/// | calendar date         | `Date` |
/// | amount                | `Money` |
/// | array, object         | `Json` |
///
/// # Example
///
/// ```
/// use ledger_model::Value;
///
/// let name = Value::from("Acme Traders");
/// let balance = Value::from(12_500i64);
/// let active = Value::from(true);
/// let empty = Value::from(None::<i32>);
/// assert!(empty.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Calendar date without a time of day.
    Date(NaiveDate),
    /// Monetary value.
    Money(Money),
    /// Fallback for nested JSON arrays and objects.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
            Value::Date(_) => "date",
            Value::Money(_) => "money",
            Value::Json(_) => "json",
        }
    }

    /// Returns `true` for the numeric variants (including money).
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) | Value::Money(_)
        )
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Converts a JSON value from a REST response into a `Value`.
    ///
    /// Integers that fit an `i64` become `Long`, larger unsigned integers
    /// become `Decimal`, other numbers become `Float`. Strings are kept as
    /// strings; date detection happens at comparison time.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Long(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Decimal(Decimal::from(u))
                } else {
                    n.as_f64().map(Value::Float).unwrap_or(Value::Null)
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::Guid(g) => write!(f, "{}", g.hyphenated()),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Money(m) => write!(f, "{}", m),
            Value::Json(j) => write!(f, "{}", j),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Long(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<Money> for Value {
    fn from(v: Money) -> Self {
        Value::Money(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from_json(json!(42)), Value::Long(42));
        assert_eq!(Value::from_json(json!(1.5)), Value::Float(1.5));
        assert_eq!(
            Value::from_json(json!(u64::MAX)),
            Value::Decimal(Decimal::from(u64::MAX))
        );
    }

    #[test]
    fn test_from_json_keeps_nested_values() {
        let nested = json!({"city": "Pune"});
        assert_eq!(Value::from_json(nested.clone()), Value::Json(nested));
        assert_eq!(Value::from_json(json!(null)), Value::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from("INV-7").to_string(), "INV-7");
        assert_eq!(Value::Decimal(Decimal::new(12050, 2)).to_string(), "120.50");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2024-03-09");
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(3)), Value::Int(3));
        assert!(Value::from(None::<&str>).is_null());
    }

    #[test]
    fn test_is_numeric() {
        assert!(Value::Money(Money::from_int(5)).is_numeric());
        assert!(Value::Float(0.1).is_numeric());
        assert!(!Value::from("5").is_numeric());
    }
}
