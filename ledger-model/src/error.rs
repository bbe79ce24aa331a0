//! Record field errors

/// Why a typed read from a [`Record`](crate::Record) failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("record has no field '{field}'")]
    Missing { field: String },

    #[error("field '{field}' holds {actual}, not {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Records are only built from JSON objects.
    #[error("cannot build a record from a JSON {actual}")]
    NotAnObject { actual: &'static str },
}

impl FieldError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
