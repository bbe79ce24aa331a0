//! Sort direction.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Descending order (Z-A, 9-0).
    #[serde(alias = "desc")]
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Returns `true` for [`Direction::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Direction::Ascending
    }

    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Direction::Ascending => "▲",
            Direction::Descending => "▼",
        }
    }

    /// Turns a descending-order comparison into one for this direction.
    ///
    /// Ascending is the exact negation of descending, ties included.
    pub fn apply(self, descending: Ordering) -> Ordering {
        match self {
            Direction::Descending => descending,
            Direction::Ascending => descending.reverse(),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}
