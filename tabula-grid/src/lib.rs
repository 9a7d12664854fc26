//! Tabular data engine: filter, sort, paginate, and select over dynamic
//! records.
//!
//! `tabula-grid` derives the exact subset of rows a table should display
//! from `(data, columns, search, sort, page, selection)` state. It is pure
//! and synchronous; rendering belongs to whatever UI layer consumes the
//! derived [`TableView`](table::TableView).

pub mod column;
pub mod filter;
pub mod page;
pub mod selection;
pub mod sort;
pub mod table;

pub mod prelude {
    pub use crate::column::{Alignment, CellFormatter, Column};
    pub use crate::filter::SearchMode;
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::sort::SortDirection;
    pub use crate::table::{
        DataTable, EmptyKind, RowCallback, SelectionCallback, SortCallback, TableId, TableView,
    };
    pub use tabula_core::{ConfigError, FieldError, Record, Value};
}
