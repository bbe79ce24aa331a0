//! Sortable table ordering for the ledger console
//!
//! Orders in-memory rows of any type by a user-selected column. Columns
//! extract a [`Value`] from each row through a caller-supplied accessor, so
//! the ordering engine never inspects row types directly.
//!
//! # Example
//!
//! ```
//! use ledger_model::Record;
//! use ledger_table::{Column, SortableTable};
//!
//! let rows = vec![
//!     Record::new().set("item", "item10"),
//!     Record::new().set("item", "item2"),
//! ];
//! let mut table = SortableTable::new(rows, vec![Column::field("item", "Item").sortable()]);
//!
//! let names: Vec<_> = table.sorted_rows().iter().map(|r| r.value("item").to_string()).collect();
//! assert_eq!(names, ["item2", "item10"]);
//!
//! table.request_sort("item");
//! let names: Vec<_> = table.sorted_rows().iter().map(|r| r.value("item").to_string()).collect();
//! assert_eq!(names, ["item10", "item2"]);
//! ```

mod column;
pub mod compare;
mod config;
mod error;
pub mod format;
mod order;
pub mod sort;
mod state;
mod table;
mod words;

pub use column::*;
pub use compare::{CompareOptions, SortKey};
pub use config::*;
pub use error::*;
pub use format::{Alignment, DisplayValue, Formatter};
pub use order::*;
pub use state::*;
pub use table::*;
pub use words::*;

pub use ledger_model::Value;
