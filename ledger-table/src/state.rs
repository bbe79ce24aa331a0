//! Sort state and header-click transitions.

use crate::{Column, Direction};

/// The active sort column and direction.
///
/// Only [`SortState::request_sort`] moves between states; every state is
/// valid and can be re-entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    field: Option<String>,
    direction: Direction,
}

impl SortState {
    /// Create a state sorting by `field` in `direction`.
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// Initial state for a set of columns: `default_field` when it names a
    /// sortable column, otherwise the first sortable column, ascending.
    ///
    /// With no sortable columns the state has no active field.
    pub fn initial<T>(columns: &[Column<T>], default_field: Option<&str>) -> Self {
        let requested = default_field.and_then(|field| {
            let found = columns.iter().find(|c| c.id == field && c.sortable);
            if found.is_none() {
                log::warn!("default sort column '{}' is not a sortable column", field);
            }
            found
        });

        let field = requested
            .or_else(|| columns.iter().find(|c| c.sortable))
            .map(|c| c.id.clone());

        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    /// Returns the same field with another direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Active field id, if any.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if `field` is the active sort field.
    pub fn is_active(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// State after the user clicks the header of `clicked`.
    ///
    /// Clicking the active ascending column switches it to descending; any
    /// other sortable column (or the active one while descending) becomes
    /// active and ascending. Unknown and non-sortable columns leave the
    /// state unchanged.
    pub fn request_sort<T>(&self, columns: &[Column<T>], clicked: &str) -> SortState {
        let Some(column) = columns.iter().find(|c| c.id == clicked) else {
            log::debug!("sort request for unknown column '{}' ignored", clicked);
            return self.clone();
        };
        if !column.sortable {
            return self.clone();
        }

        let next = if self.is_active(clicked) && self.direction.is_ascending() {
            SortState::new(clicked, Direction::Descending)
        } else {
            SortState::new(clicked, Direction::Ascending)
        };
        log::debug!(
            "sort {:?} {} -> {} {}",
            self.field,
            self.direction,
            clicked,
            next.direction
        );
        next
    }
}
