//! Sortable table view over in-memory rows.

use crate::compare::CompareOptions;
use crate::format::DisplayValue;
use crate::sort::sort_indices_by;
use crate::{Column, Direction, SortState, TableConfig, TableError};

/// Rows, their columns, and the sort state chosen by the user.
///
/// The table never reorders its own rows: [`SortableTable::sorted_rows`]
/// returns references in display order and leaves the stored rows as they
/// were loaded.
///
/// # Example
///
/// ```
/// use ledger_model::Record;
/// use ledger_table::{Column, Direction, SortableTable};
///
/// let rows = vec![
///     Record::new().set("name", "Stores").set("balance", 300),
///     Record::new().set("name", "Cash").set("balance", 1200),
/// ];
/// let columns = vec![
///     Column::field("name", "Name").sortable(),
///     Column::field("balance", "Balance").sortable(),
/// ];
/// let mut table = SortableTable::new(rows, columns);
///
/// table.request_sort("balance");
/// table.request_sort("balance");
/// assert_eq!(table.state().direction(), Direction::Descending);
/// assert_eq!(table.sorted_indices(), [1, 0]);
/// ```
#[derive(Debug)]
pub struct SortableTable<T> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    state: SortState,
    options: CompareOptions,
}

impl<T> SortableTable<T> {
    /// Create a table with the default configuration.
    pub fn new(rows: Vec<T>, columns: Vec<Column<T>>) -> Self {
        Self::with_config(rows, columns, &TableConfig::default())
    }

    /// Create a table with the given configuration.
    pub fn with_config(rows: Vec<T>, columns: Vec<Column<T>>, config: &TableConfig) -> Self {
        let state = SortState::initial(&columns, config.default_field.as_deref())
            .with_direction(config.default_direction);
        Self {
            rows,
            columns,
            state,
            options: config.compare_options(),
        }
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Rows in load order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Replace the rows. The sort state is kept.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
    }

    /// Column definitions.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Find a column by id.
    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id == id)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Current sort state.
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Handle a click on the header of `field`.
    ///
    /// Returns the new sort state.
    pub fn request_sort(&mut self, field: &str) -> &SortState {
        self.state = self.state.request_sort(&self.columns, field);
        &self.state
    }

    /// Set the sort column and direction directly.
    pub fn set_sort(&mut self, field: &str, direction: Direction) -> Result<(), TableError> {
        let column = self
            .column(field)
            .ok_or_else(|| TableError::unknown_column(field))?;
        if !column.sortable {
            return Err(TableError::not_sortable(field));
        }
        self.state = SortState::new(field, direction);
        Ok(())
    }

    /// The column rows are ordered by.
    ///
    /// `None` when no field is active (no column is sortable) or the active
    /// field matches no column.
    fn sort_column(&self) -> Option<&Column<T>> {
        let field = self.state.field()?;
        let column = self.column(field);
        if column.is_none() {
            log::warn!("sort column '{}' not found, keeping load order", field);
        }
        column
    }

    /// Row positions in display order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        match self.sort_column() {
            Some(column) => sort_indices_by(&self.rows, self.state.direction(), &self.options, |row| {
                column.value(row)
            }),
            None => (0..self.rows.len()).collect(),
        }
    }

    /// Rows in display order.
    pub fn sorted_rows(&self) -> Vec<&T> {
        self.sorted_indices()
            .into_iter()
            .map(|index| &self.rows[index])
            .collect()
    }

    // -------------------------------------------------------------------------
    // Display
    // -------------------------------------------------------------------------

    /// Header text for a column, with the sort indicator when it is active.
    pub fn header_label(&self, id: &str) -> Option<String> {
        let column = self.column(id)?;
        let direction = self.state.is_active(id).then(|| self.state.direction());
        Some(column.header_label(direction))
    }

    /// Header texts for all columns, in column order.
    pub fn header_labels(&self) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| {
                let direction = self.state.is_active(&c.id).then(|| self.state.direction());
                c.header_label(direction)
            })
            .collect()
    }

    /// Cells of every row in display order.
    pub fn render_rows(&self) -> Vec<Vec<DisplayValue>> {
        self.sorted_rows()
            .into_iter()
            .map(|row| self.columns.iter().map(|c| c.render(row)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_model::Record;

    fn table() -> SortableTable<Record> {
        let rows = vec![
            Record::new().set("code", "item10").set("qty", 4),
            Record::new().set("code", "item2").set("qty", None::<i32>),
            Record::new().set("code", "item1").set("qty", 9),
        ];
        let columns = vec![
            Column::field("code", "Code").sortable(),
            Column::field("qty", "Qty").sortable(),
            Column::field("note", "Note"),
        ];
        SortableTable::new(rows, columns)
    }

    #[test]
    fn test_default_state_sorts_first_sortable_column() {
        let table = table();
        assert_eq!(table.state(), &SortState::new("code", Direction::Ascending));
        assert_eq!(table.sorted_indices(), [2, 1, 0]);
    }

    #[test]
    fn test_request_sort_cycle() {
        let mut table = table();
        table.request_sort("qty");
        assert_eq!(table.sorted_indices(), [0, 2, 1]);
        table.request_sort("qty");
        assert_eq!(table.sorted_indices(), [2, 0, 1]);
        table.request_sort("note");
        assert_eq!(table.state(), &SortState::new("qty", Direction::Descending));
    }

    #[test]
    fn test_set_sort_errors() {
        let mut table = table();
        assert!(matches!(
            table.set_sort("note", Direction::Ascending),
            Err(TableError::NotSortable { .. })
        ));
        assert!(matches!(
            table.set_sort("missing", Direction::Ascending),
            Err(TableError::UnknownColumn { .. })
        ));
        table.set_sort("code", Direction::Descending).unwrap();
        assert_eq!(table.sorted_indices(), [0, 1, 2]);
    }

    #[test]
    fn test_unknown_active_field_keeps_load_order() {
        let config = TableConfig::default().with_default_field("code");
        let mut table = SortableTable::with_config(table().rows().to_vec(), vec![], &config);
        assert_eq!(table.state().field(), None);
        assert_eq!(table.sorted_indices(), [0, 1, 2]);

        table.state = SortState::new("gone", Direction::Descending);
        assert_eq!(table.sorted_indices(), [0, 1, 2]);
    }

    #[test]
    fn test_no_sortable_columns_keeps_load_order() {
        let rows = table().rows().to_vec();
        let table = SortableTable::new(rows, vec![Column::field("qty", "Qty")]);
        assert_eq!(table.state().field(), None);
        assert_eq!(table.sorted_indices(), [0, 1, 2]);
        assert_eq!(table.header_labels(), ["Qty"]);
    }

    #[test]
    fn test_set_rows_keeps_state() {
        let mut table = table();
        table.request_sort("qty");
        table.set_rows(vec![Record::new().set("qty", 2), Record::new().set("qty", 1)]);
        assert_eq!(table.state().field(), Some("qty"));
        assert_eq!(table.sorted_indices(), [1, 0]);
    }

    #[test]
    fn test_headers_and_cells() {
        let table = table();
        assert_eq!(table.header_labels(), ["Code ▲", "Qty", "Note"]);
        assert_eq!(table.header_label("qty").as_deref(), Some("Qty"));
        assert_eq!(table.header_label("missing"), None);

        let cells = table.render_rows();
        let first: Vec<&str> = cells[0].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(first, ["item1", "9", ""]);
    }
}
