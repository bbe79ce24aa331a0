//! Table configuration

use serde::Deserialize;
use serde::Serialize;

use crate::compare::CompareOptions;
use crate::{Direction, TableError};

/// Configuration for a sortable table.
///
/// # Example
///
/// ```
/// use ledger_table::{Direction, TableConfig};
///
/// let config = TableConfig::default()
///     .with_default_field("voucher_date")
///     .with_default_direction(Direction::Descending);
///
/// let from_json = TableConfig::from_json(
///     r#"{"default_field": "voucher_date", "default_direction": "desc"}"#,
/// )
/// .unwrap();
/// assert_eq!(config, from_json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column sorted when the table is first shown.
    ///
    /// Default: the first sortable column
    pub default_field: Option<String>,

    /// Direction used when the table is first shown.
    ///
    /// Default: ascending
    pub default_direction: Direction,

    /// Compare strings that both parse as ISO dates by timestamp.
    ///
    /// Default: true
    pub parse_date_strings: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_field: None,
            default_direction: Direction::Ascending,
            parse_date_strings: true,
        }
    }
}

impl TableConfig {
    /// Creates a new table config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a config from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the initially sorted column.
    pub fn with_default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = Some(field.into());
        self
    }

    /// Sets the initial direction.
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = direction;
        self
    }

    /// Enables or disables date detection in strings.
    pub fn with_date_parsing(mut self, enabled: bool) -> Self {
        self.parse_date_strings = enabled;
        self
    }

    /// Comparison options derived from this config.
    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            parse_date_strings: self.parse_date_strings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(TableConfig::from_json("{}").unwrap(), TableConfig::default());
    }

    #[test]
    fn test_direction_spellings() {
        let config = TableConfig::from_json(r#"{"default_direction": "descending"}"#).unwrap();
        assert_eq!(config.default_direction, Direction::Descending);
        let config = TableConfig::from_json(r#"{"default_direction": "asc"}"#).unwrap();
        assert_eq!(config.default_direction, Direction::Ascending);
    }

    #[test]
    fn test_invalid_json() {
        let err = TableConfig::from_json(r#"{"default_direction": "sideways"}"#).unwrap_err();
        assert!(matches!(err, TableError::Config(_)));
    }

    #[test]
    fn test_compare_options() {
        let config = TableConfig::new().with_date_parsing(false);
        assert!(!config.compare_options().parse_date_strings);
    }
}
