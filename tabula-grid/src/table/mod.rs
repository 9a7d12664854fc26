//! DataTable - filterable, sortable, paginated view state over records.
//!
//! The DataTable provides:
//! - Search filtering over configurable fields (substring or fuzzy)
//! - Single-column sorting with a three-state toggle (asc, desc, off)
//! - Pagination with a clamped display slice
//! - Row selection (single or multi-select) persisting across pages
//! - Change callbacks (selection, sort, row click)
//!
//! # Example
//!
//! ```
//! use tabula_grid::prelude::*;
//!
//! let data = vec![
//!     Record::new().set("id", 1i64).set("name", "Beta").set("score", 10i64),
//!     Record::new().set("id", 2i64).set("name", "alpha").set("score", 20i64),
//!     Record::new().set("id", 3i64).set("name", "Gamma").set("score", Value::Null),
//! ];
//!
//! let table = DataTable::new("id", vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("score", "Score").sortable(),
//! ])
//! .with_page_size(2)
//! .with_selection_mode(SelectionMode::Multi);
//!
//! table.set_data(data);
//! table.set_search_query("a");
//! table.toggle_sort("score");
//!
//! let view = table.view();
//! assert_eq!(view.page, 1);
//! ```

mod events;
mod state;
mod view;

pub use events::{RowCallback, SelectionCallback, SortCallback};
pub use state::{DataTable, TableId};
pub use view::{EmptyKind, TableView};
