//! Column descriptors.

use std::cmp::Ordering;
use std::sync::Arc;

use ledger_model::Record;
use ledger_model::Value;

use crate::compare::{CompareOptions, SortKey};
use crate::format::{Alignment, DisplayValue, Formatter, PlainFormatter};
use crate::Direction;

/// Reads a column's value from a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Column configuration.
///
/// A column names one field of the row type: its id, header text, the
/// accessor that extracts its value, and whether the user may sort by it.
/// Columns are not sortable unless [`Column::sortable`] is called.
///
/// # Examples
///
/// ```
/// use ledger_table::{Alignment, Column, Value};
///
/// struct Voucher {
///     number: String,
///     amount: i64,
/// }
///
/// let columns: Vec<Column<Voucher>> = vec![
///     Column::new("number", "Voucher No.", |v: &Voucher| Value::from(&v.number)).sortable(),
///     Column::new("amount", "Amount", |v: &Voucher| Value::from(v.amount))
///         .sortable()
///         .align(Alignment::Right),
/// ];
/// ```
pub struct Column<T> {
    /// Unique identifier for this column.
    pub id: String,
    /// Header text.
    pub header: String,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column is sortable.
    pub sortable: bool,
    accessor: Accessor<T>,
    formatter: Option<Arc<dyn Formatter<T>>>,
}

impl<T> Column<T> {
    /// Create a new column reading its value through `accessor`.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&T) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            align: Alignment::Left,
            sortable: false,
            accessor: Arc::new(accessor),
            formatter: None,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the cell formatter.
    pub fn formatter(mut self, formatter: impl Formatter<T> + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Extract this column's value from a row.
    pub fn value(&self, row: &T) -> Value {
        (self.accessor)(row)
    }

    /// Compare two rows by this column.
    pub fn compare(&self, a: &T, b: &T, direction: Direction, options: &CompareOptions) -> Ordering {
        let key = SortKey::new(&self.value(a), options);
        key.compare(&SortKey::new(&self.value(b), options), direction)
    }

    /// Render the cell for a row.
    ///
    /// Without a formatter the value's display form is used, aligned like
    /// the column.
    pub fn render(&self, row: &T) -> DisplayValue {
        let value = self.value(row);
        match &self.formatter {
            Some(formatter) => formatter.format(&value, row),
            None => PlainFormatter.format(&value, row).aligned(self.align),
        }
    }

    /// Header text with the sort indicator when this column is active.
    ///
    /// The indicator goes after left-aligned and centered headers and before
    /// right-aligned ones, so the header text does not shift.
    pub fn header_label(&self, direction: Option<Direction>) -> String {
        let Some(direction) = direction else {
            return self.header.clone();
        };
        let indicator = direction.indicator();
        match self.align {
            Alignment::Right => format!("{} {}", indicator, self.header),
            Alignment::Left | Alignment::Center => format!("{} {}", self.header, indicator),
        }
    }
}

impl Column<Record> {
    /// Create a column over a [`Record`] field. Missing fields read as null.
    pub fn field(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        let key = id.clone();
        Self::new(id, header, move |record: &Record| record.value(&key).clone())
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            align: self.align,
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
            formatter: self.formatter.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::MoneyFormatter;

    #[test]
    fn test_record_field_column() {
        let column = Column::field("ledger", "Ledger");
        let row = Record::new().set("ledger", "Cash");
        assert_eq!(column.value(&row), Value::from("Cash"));
        assert!(column.value(&Record::new()).is_null());
        assert!(!column.sortable);
    }

    #[test]
    fn test_compare_rows() {
        let column = Column::field("qty", "Qty").sortable();
        let a = Record::new().set("qty", 2);
        let b = Record::new().set("qty", 10);
        let missing = Record::new();
        let options = CompareOptions::default();
        assert_eq!(column.compare(&a, &b, Direction::Ascending, &options), Ordering::Less);
        assert_eq!(column.compare(&a, &b, Direction::Descending, &options), Ordering::Greater);
        assert_eq!(
            column.compare(&missing, &a, Direction::Descending, &options),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_rows_honours_options() {
        let column = Column::field("posted", "Posted").sortable();
        let a = Record::new().set("posted", "2024-03-09T10:00:00+05:30");
        let b = Record::new().set("posted", "2024-03-09T05:00:00Z");
        let text_only = CompareOptions {
            parse_date_strings: false,
        };
        assert_eq!(
            column.compare(&a, &b, Direction::Ascending, &CompareOptions::default()),
            Ordering::Less
        );
        assert_eq!(column.compare(&a, &b, Direction::Ascending, &text_only), Ordering::Greater);
    }

    #[test]
    fn test_render_uses_formatter() {
        let row = Record::new().set("debit", 1500);
        let plain = Column::field("debit", "Debit").align(Alignment::Right);
        assert_eq!(plain.render(&row), DisplayValue::new("1500").aligned(Alignment::Right));

        let money = Column::field("debit", "Debit").formatter(MoneyFormatter::new(2));
        assert_eq!(money.render(&row).text, "1,500.00");
    }

    #[test]
    fn test_header_label() {
        let left = Column::field("name", "Name");
        assert_eq!(left.header_label(None), "Name");
        assert_eq!(left.header_label(Some(Direction::Ascending)), "Name ▲");

        let right = Column::field("total", "Total").align(Alignment::Right);
        assert_eq!(right.header_label(Some(Direction::Descending)), "▼ Total");
    }
}
