//! Dynamic REST record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Deserializer;
use uuid::Uuid;

use super::Value;
use crate::error::FieldError;

static NULL: Value = Value::Null;

/// A dynamic record as returned by a console REST endpoint.
///
/// Fields are looked up by name. The typed getters report missing fields
/// and type mismatches as [`FieldError`]; [`Record::value`] reads a missing
/// field as null, which is what table columns want.
///
/// # Example
///
/// ```
/// use ledger_model::Record;
///
/// let record = Record::new()
///     .set("name", "Acme Traders")
///     .set("balance", 12_500i64);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Acme Traders"));
/// assert!(record.value("missing").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    id: Option<Uuid>,
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object.
    ///
    /// An `id` key holding a UUID string also becomes the record ID; the
    /// field itself is kept so it can be shown and sorted like any other.
    pub fn from_json(json: serde_json::Value) -> Result<Self, FieldError> {
        let serde_json::Value::Object(map) = json else {
            return Err(FieldError::NotAnObject {
                actual: json_type_name(&json),
            });
        };

        let id = map
            .get("id")
            .and_then(|v| v.as_str())
            .and_then(|s| Uuid::parse_str(s).ok());

        let fields = map
            .into_iter()
            .map(|(key, value)| (key, Value::from_json(value)))
            .collect();

        Ok(Self { id, fields })
    }

    /// Returns the record ID, if set.
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field value, reading a missing field as [`Value::Null`].
    pub fn value(&self, field: &str) -> &Value {
        self.fields.get(field).unwrap_or(&NULL)
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    // Typed getters: a missing field or another type is an error, an
    // explicit null is `Ok(None)`.

    /// Reads a text field.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        self.typed(field, "string", |value| match value {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Reads a boolean field.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        self.typed(field, "bool", |value| match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// Reads an integer field; `Int` values widen to `i64`.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        self.typed(field, "long", |value| match value {
            Value::Long(n) => Some(*n),
            Value::Int(n) => Some(i64::from(*n)),
            _ => None,
        })
    }

    /// Reads a floating point field.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        self.typed(field, "float", |value| match value {
            Value::Float(f) => Some(*f),
            _ => None,
        })
    }

    fn typed<'a, R>(
        &'a self,
        field: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a Value) -> Option<R>,
    ) -> Result<Option<R>, FieldError> {
        let value = self.fields.get(field).ok_or_else(|| FieldError::missing(field))?;
        if value.is_null() {
            return Ok(None);
        }
        extract(value)
            .map(Some)
            .ok_or_else(|| FieldError::type_mismatch(field, expected, value.type_name()))
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = serde_json::Value::deserialize(deserializer)?;
        Record::from_json(json).map_err(serde::de::Error::custom)
    }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_getters() {
        let record = Record::new()
            .set("name", "Acme Traders")
            .set("branches", 3)
            .set("closed_on", None::<i32>);

        assert_eq!(record.get_string("name").unwrap(), Some("Acme Traders"));
        assert_eq!(record.get_long("branches").unwrap(), Some(3));
        assert_eq!(record.get_bool("closed_on").unwrap(), None);
        assert_eq!(
            record.get_float("missing").unwrap_err(),
            FieldError::missing("missing")
        );
        assert_eq!(
            record.get_bool("name").unwrap_err(),
            FieldError::type_mismatch("name", "bool", "string")
        );
    }

    #[test]
    fn test_float_getter_is_strict() {
        let record = Record::new().set("rate", 0.18).set("qty", 4);
        assert_eq!(record.get_float("rate").unwrap(), Some(0.18));
        assert_eq!(
            record.get_float("qty").unwrap_err(),
            FieldError::type_mismatch("qty", "float", "int")
        );
        assert!(record.get_float("nan").is_err());
    }

    #[test]
    fn test_missing_field_reads_as_null() {
        let record = Record::new().set("code", "V-001");
        assert!(record.value("narration").is_null());
        assert_eq!(record.value("code"), &Value::from("V-001"));
    }

    #[test]
    fn test_from_json_object() {
        let record = Record::from_json(json!({
            "id": "12345678-1234-1234-1234-123456789012",
            "voucher_no": "JV/24/0017",
            "amount": 1500
        }))
        .unwrap();

        assert_eq!(
            record.id(),
            Some(Uuid::parse_str("12345678-1234-1234-1234-123456789012").unwrap())
        );
        assert_eq!(record.get_string("voucher_no").unwrap(), Some("JV/24/0017"));
        assert_eq!(record.get_long("amount").unwrap(), Some(1500));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        let err = Record::from_json(json!([1, 2])).unwrap_err();
        assert_eq!(err, FieldError::NotAnObject { actual: "array" });
    }

    #[test]
    fn test_deserialize_list() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"name": "Stores"}, {"name": "Accounts", "id": "n/a"}]"#)
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id(), None);
        assert_eq!(records[1].get_string("name").unwrap(), Some("Accounts"));
    }
}
