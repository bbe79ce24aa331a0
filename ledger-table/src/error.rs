//! Table error types

use rust_decimal::Decimal;

/// Errors raised at the edges of the ordering engine.
///
/// Sorting itself never fails; these cover programmatic sort overrides,
/// spelling out amounts, and reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// No column has the given id.
    #[error("Column '{field}' not found")]
    UnknownColumn { field: String },

    /// The column exists but cannot be sorted.
    #[error("Column '{field}' is not sortable")]
    NotSortable { field: String },

    /// The amount is too large to be spelled out in words.
    #[error("Amount {amount} is outside the range that can be spelled out")]
    AmountOutOfRange { amount: Decimal },

    /// The table configuration could not be parsed.
    #[error("Invalid table config: {0}")]
    Config(#[from] serde_json::Error),
}

impl TableError {
    /// Creates a new unknown column error.
    pub fn unknown_column(field: impl Into<String>) -> Self {
        Self::UnknownColumn {
            field: field.into(),
        }
    }

    /// Creates a new not sortable error.
    pub fn not_sortable(field: impl Into<String>) -> Self {
        Self::NotSortable {
            field: field.into(),
        }
    }
}
