//! Change callbacks for the DataTable.
//!
//! The table invokes these synchronously from whichever mutation caused the
//! change, after internal locks are released.

use std::sync::Arc;

use tabula_core::Record;

use crate::sort::SortDirection;

/// Called with the full materialized list of selected records, in dataset
/// order, each time the selection changes.
pub type SelectionCallback = Arc<dyn Fn(&[Record]) + Send + Sync>;

/// Called with the clicked record.
pub type RowCallback = Arc<dyn Fn(&Record) + Send + Sync>;

/// Called with the new sort state after a toggle (`None` when sorting is
/// cleared).
pub type SortCallback = Arc<dyn Fn(Option<(&str, SortDirection)>) + Send + Sync>;

/// Registered callbacks, stored inside the table state.
#[derive(Clone, Default)]
pub(super) struct Callbacks {
    pub selection_change: Option<SelectionCallback>,
    pub row_click: Option<RowCallback>,
    pub sort_change: Option<SortCallback>,
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("selection_change", &self.selection_change.is_some())
            .field("row_click", &self.row_click.is_some())
            .field("sort_change", &self.sort_change.is_some())
            .finish()
    }
}
