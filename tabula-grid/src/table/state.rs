//! DataTable state and transitions.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::{debug, trace};

use tabula_core::{ConfigError, Record};

use crate::column::Column;
use crate::filter::SearchMode;
use crate::selection::{Selection, SelectionMode};
use crate::sort::SortDirection;

use super::events::Callbacks;
use super::view::{TableView, derive_view};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__datatable_{}", self.0)
    }
}

/// Internal state for the DataTable.
#[derive(Debug)]
pub(super) struct TableInner {
    /// The dataset, in caller order.
    pub data: Vec<Record>,
    /// Field providing record identity.
    pub key_field: String,
    /// Column definitions.
    pub columns: Vec<Column>,
    /// Whether filtering is applied at all.
    pub searchable: bool,
    /// Current search query.
    pub search_query: String,
    /// Fields searched; empty means every column key.
    pub search_fields: Vec<String>,
    /// Substring or fuzzy matching.
    pub search_mode: SearchMode,
    /// Current sort state. `None` is unsorted (filtered order).
    pub sort: Option<(String, SortDirection)>,
    /// Current 1-based page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Selection state (by record key).
    pub selection: Selection<String>,
    /// Focused row index within the current view, if any.
    pub cursor: Option<usize>,
    /// Registered change callbacks.
    pub callbacks: Callbacks,
    /// Bumped on every mutation that invalidates the derived view.
    pub revision: u64,
    /// Cached view, keyed on the revision it was derived from.
    pub cache: Option<(u64, Arc<TableView>)>,
}

impl TableInner {
    fn new(key_field: String, columns: Vec<Column>) -> Self {
        Self {
            data: Vec::new(),
            key_field,
            columns,
            searchable: true,
            search_query: String::new(),
            search_fields: Vec::new(),
            search_mode: SearchMode::default(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selection: Selection::default(),
            cursor: None,
            callbacks: Callbacks::default(),
            revision: 0,
            cache: None,
        }
    }

    /// The fields the filter searches: the configured list, or every
    /// column's key when none was configured.
    pub fn effective_search_fields(&self) -> Vec<String> {
        if self.search_fields.is_empty() {
            self.columns.iter().map(|c| c.key.clone()).collect()
        } else {
            self.search_fields.clone()
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Derive (or reuse) the view for the current revision.
    fn view_cached(&mut self) -> Arc<TableView> {
        if let Some((revision, view)) = &self.cache
            && *revision == self.revision
        {
            return Arc::clone(view);
        }
        let view = derive_view(self);
        self.cache = Some((self.revision, Arc::clone(&view)));
        view
    }

    /// Selected records materialized from the dataset, in dataset order.
    fn selected_records(&self) -> Vec<Record> {
        self.data
            .iter()
            .filter(|record| {
                record
                    .key(&self.key_field)
                    .is_some_and(|key| self.selection.is_selected(&key))
            })
            .cloned()
            .collect()
    }
}

/// A filterable, sortable, paginated table state over dynamic records.
///
/// `DataTable` is a cheap-to-clone handle; clones share state. All
/// derivation is pure and synchronous: [`DataTable::view`] recomputes
/// `filter -> sort -> paginate` on demand and memoizes the result until the
/// next relevant change.
#[derive(Debug)]
pub struct DataTable {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl DataTable {
    /// Create a new table keyed on `key_field` with column definitions.
    pub fn new(key_field: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(key_field.into(), columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a table with initial data.
    pub fn with_data(
        key_field: impl Into<String>,
        columns: Vec<Column>,
        data: Vec<Record>,
    ) -> Self {
        let table = Self::new(key_field, columns);
        table.set_data(data);
        table
    }

    /// Set the page size (builder-style).
    pub fn with_page_size(self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Set the selection mode (builder-style).
    pub fn with_selection_mode(self, mode: SelectionMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection = Selection::new(mode);
        }
        self
    }

    /// Restrict searching to the given fields (builder-style).
    pub fn with_search_fields(self, fields: Vec<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.search_fields = fields;
            guard.bump();
        }
        self
    }

    /// Set the search mode (builder-style).
    pub fn with_search_mode(self, mode: SearchMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.search_mode = mode;
            guard.bump();
        }
        self
    }

    /// Disable filtering entirely (builder-style).
    pub fn not_searchable(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.searchable = false;
            guard.bump();
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Configuration access
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the key field name.
    pub fn key_field(&self) -> String {
        self.inner
            .read()
            .map(|g| g.key_field.clone())
            .unwrap_or_default()
    }

    /// Validate the current configuration and dataset.
    ///
    /// Checks the caller contract: unique non-null keys, positive page
    /// size, sort and search fields that columns declare. The engine clamps
    /// around these in release builds; `validate` surfaces them explicitly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Ok(guard) = self.inner.read() else {
            return Ok(());
        };
        let column_keys: HashSet<&str> = guard.columns.iter().map(|c| c.key.as_str()).collect();
        if let Some((column, _)) = &guard.sort
            && !column_keys.contains(column.as_str())
        {
            return Err(ConfigError::UnknownColumn {
                key: column.clone(),
            });
        }
        for field in &guard.search_fields {
            if !column_keys.contains(field.as_str()) {
                return Err(ConfigError::UnknownColumn { key: field.clone() });
            }
        }
        self.validate_locked(&guard)
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.data.len()).unwrap_or(0)
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all records.
    pub fn data(&self) -> Vec<Record> {
        self.inner.read().map(|g| g.data.clone()).unwrap_or_default()
    }

    /// Replace the dataset.
    ///
    /// This is a new dataset: selection and cursor are cleared and the page
    /// resets to 1. Fires the selection callback with an empty list when
    /// the old selection was non-empty.
    pub fn set_data(&self, data: Vec<Record>) {
        let mut emit = None;
        if let Ok(mut guard) = self.inner.write() {
            guard.data = data;
            let had_selection = guard.selection.clear();
            guard.page = 1;
            guard.cursor = None;
            guard.bump();
            self.dirty.store(true, Ordering::SeqCst);
            debug_assert!(self.validate_locked(&guard).is_ok(), "invalid dataset");
            if had_selection {
                emit = guard.callbacks.selection_change.clone().map(|cb| (cb, vec![]));
            }
        }
        if let Some((cb, records)) = emit {
            cb(&records);
        }
    }

    /// Replace the dataset in place, keeping selections for keys that
    /// survive.
    ///
    /// Use for refreshes of the same logical dataset. Fires the selection
    /// callback when the refresh drops selected keys.
    pub fn refresh_data(&self, data: Vec<Record>) {
        let mut emit = None;
        if let Ok(mut guard) = self.inner.write() {
            let keys: HashSet<String> = data
                .iter()
                .filter_map(|r| r.key(&guard.key_field))
                .collect();
            guard.data = data;
            let dropped = guard.selection.retain(|key| keys.contains(key));
            guard.cursor = None;
            guard.bump();
            self.dirty.store(true, Ordering::SeqCst);
            debug_assert!(self.validate_locked(&guard).is_ok(), "invalid dataset");
            if dropped {
                let records = guard.selected_records();
                emit = guard.callbacks.selection_change.clone().map(|cb| (cb, records));
            }
        }
        if let Some((cb, records)) = emit {
            cb(&records);
        }
    }

    fn validate_locked(&self, guard: &TableInner) -> Result<(), ConfigError> {
        if guard.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        let mut seen = HashSet::new();
        for (index, record) in guard.data.iter().enumerate() {
            let Some(key) = record.key(&guard.key_field) else {
                return Err(ConfigError::MissingKey {
                    field: guard.key_field.clone(),
                    index,
                });
            };
            if !seen.insert(key.clone()) {
                return Err(ConfigError::DuplicateKey { key });
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Get the current search query.
    pub fn search_query(&self) -> String {
        self.inner
            .read()
            .map(|g| g.search_query.clone())
            .unwrap_or_default()
    }

    /// Set the search query. Resets the page to 1.
    pub fn set_search_query(&self, query: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            let query = query.into();
            if guard.search_query != query {
                trace!("search query changed to {query:?}");
                guard.search_query = query;
                guard.page = 1;
                guard.cursor = None;
                guard.bump();
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Restrict searching to the given fields. Resets the page to 1.
    pub fn set_search_fields(&self, fields: Vec<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.search_fields = fields;
            guard.page = 1;
            guard.cursor = None;
            guard.bump();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set the search mode. Resets the page to 1.
    pub fn set_search_mode(&self, mode: SearchMode) {
        if let Ok(mut guard) = self.inner.write() {
            guard.search_mode = mode;
            guard.page = 1;
            guard.cursor = None;
            guard.bump();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort state.
    pub fn sort(&self) -> Option<(String, SortDirection)> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Toggle sort for a column through the three-state cycle:
    /// other column -> ascending -> descending -> off.
    ///
    /// Ignored for unknown or non-sortable columns. Resets the page to 1.
    /// Returns the new sort state.
    pub fn toggle_sort(&self, column: &str) -> Option<(String, SortDirection)> {
        let mut emit = None;
        let mut result = None;
        if let Ok(mut guard) = self.inner.write() {
            let sortable = guard
                .columns
                .iter()
                .any(|c| c.key == column && c.sortable);
            if !sortable {
                return None;
            }
            let next = match &guard.sort {
                Some((current, SortDirection::Ascending)) if current == column => {
                    Some((column.to_string(), SortDirection::Descending))
                }
                Some((current, SortDirection::Descending)) if current == column => None,
                _ => Some((column.to_string(), SortDirection::Ascending)),
            };
            debug!("sort toggled on {column:?}: {next:?}");
            guard.sort = next.clone();
            guard.page = 1;
            guard.cursor = None;
            guard.bump();
            self.dirty.store(true, Ordering::SeqCst);
            result = guard.sort.clone();
            emit = guard.callbacks.sort_change.clone().map(|cb| (cb, next));
        }
        if let Some((cb, state)) = emit {
            cb(state.as_ref().map(|(c, d)| (c.as_str(), *d)));
        }
        result
    }

    /// Set an explicit sort state. Resets the page to 1.
    ///
    /// Ignored for unknown or non-sortable columns.
    pub fn set_sort(&self, column: &str, direction: SortDirection) {
        if let Ok(mut guard) = self.inner.write() {
            let sortable = guard
                .columns
                .iter()
                .any(|c| c.key == column && c.sortable);
            if sortable {
                guard.sort = Some((column.to_string(), direction));
                guard.page = 1;
                guard.cursor = None;
                guard.bump();
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Clear the sort state, returning to filtered order.
    pub fn clear_sort(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.sort.is_some()
        {
            guard.sort = None;
            guard.page = 1;
            guard.cursor = None;
            guard.bump();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the stored 1-based page.
    ///
    /// The stored page is not silently corrected when filtering shrinks the
    /// result set; the view clamps the page it slices from. See
    /// [`TableView::page`] for the effective page.
    pub fn page(&self) -> usize {
        self.inner.read().map(|g| g.page).unwrap_or(1)
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.inner.read().map(|g| g.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Set the current page. Values below 1 clamp to 1.
    pub fn set_page(&self, page: usize) {
        if let Ok(mut guard) = self.inner.write() {
            let page = page.max(1);
            if guard.page != page {
                guard.page = page;
                guard.cursor = None;
                guard.bump();
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Advance to the next page, if one exists. Returns the new stored page.
    pub fn next_page(&self) -> usize {
        if let Ok(mut guard) = self.inner.write() {
            let view = guard.view_cached();
            if view.has_next_page() {
                guard.page = view.page + 1;
                guard.cursor = None;
                guard.bump();
                self.dirty.store(true, Ordering::SeqCst);
            }
            return guard.page;
        }
        1
    }

    /// Go back one page, if possible. Returns the new stored page.
    pub fn prev_page(&self) -> usize {
        if let Ok(mut guard) = self.inner.write() {
            let view = guard.view_cached();
            if view.has_prev_page() {
                guard.page = view.page - 1;
                guard.cursor = None;
                guard.bump();
                self.dirty.store(true, Ordering::SeqCst);
            }
            return guard.page;
        }
        1
    }

    /// Set the page size. Resets the page to 1.
    ///
    /// A page size of 0 is a contract violation; release builds clamp it
    /// to 1.
    pub fn set_page_size(&self, page_size: usize) {
        debug_assert!(page_size > 0, "page size must be greater than zero");
        if let Ok(mut guard) = self.inner.write() {
            guard.page_size = page_size.max(1);
            guard.page = 1;
            guard.cursor = None;
            guard.bump();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.inner
            .read()
            .map(|g| g.selection.mode)
            .unwrap_or_default()
    }

    /// Get all selected keys (unordered).
    pub fn selected_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Get all selected records, in dataset order.
    pub fn selected_records(&self) -> Vec<Record> {
        self.inner
            .read()
            .map(|g| g.selected_records())
            .unwrap_or_default()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(&key.to_string()))
            .unwrap_or(false)
    }

    /// Toggle selection of a record by key.
    ///
    /// Keys not present in the dataset are ignored, so the selection never
    /// references a record outside `data`. Fires the selection callback
    /// when the selection changes.
    pub fn toggle_select(&self, key: &str) {
        let mut emit = None;
        if let Ok(mut guard) = self.inner.write()
            && guard
                .data
                .iter()
                .any(|r| r.key(&guard.key_field).as_deref() == Some(key))
            && guard.selection.toggle(key.to_string())
        {
            self.dirty.store(true, Ordering::SeqCst);
            let records = guard.selected_records();
            emit = guard.callbacks.selection_change.clone().map(|cb| (cb, records));
        }
        if let Some((cb, records)) = emit {
            cb(&records);
        }
    }

    /// Toggle selection of the record under the cursor.
    pub fn toggle_select_at_cursor(&self) {
        let view = self.view();
        let key = self.cursor().and_then(|c| view.row_keys.get(c).cloned());
        if let Some(key) = key {
            self.toggle_select(&key);
        }
    }

    /// Select or deselect every record on the current page.
    ///
    /// If every page row is already selected, deselects them; otherwise
    /// selects them all. The selection set itself stays global across
    /// pages. Multi-select mode only.
    pub fn toggle_select_all(&self) {
        let mut emit = None;
        if let Ok(mut guard) = self.inner.write() {
            if guard.selection.mode != SelectionMode::Multi {
                return;
            }
            let view = guard.view_cached();
            let page_keys: Vec<String> = view.row_keys.clone();
            if page_keys.is_empty() {
                return;
            }
            let changed = if guard.selection.contains_all(page_keys.iter()) {
                guard.selection.deselect_all(page_keys)
            } else {
                guard.selection.select_all(page_keys)
            };
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
                let records = guard.selected_records();
                emit = guard.callbacks.selection_change.clone().map(|cb| (cb, records));
            }
        }
        if let Some((cb, records)) = emit {
            cb(&records);
        }
    }

    /// Clear the selection. Fires the callback if anything was selected.
    pub fn deselect_all(&self) {
        let mut emit = None;
        if let Ok(mut guard) = self.inner.write()
            && guard.selection.clear()
        {
            self.dirty.store(true, Ordering::SeqCst);
            emit = guard.callbacks.selection_change.clone().map(|cb| (cb, vec![]));
        }
        if let Some((cb, records)) = emit {
            cb(&records);
        }
    }

    // -------------------------------------------------------------------------
    // Cursor & clicks
    // -------------------------------------------------------------------------

    /// Get the cursor position within the current view.
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|g| g.cursor)
    }

    /// Set the cursor to a view row index. Out-of-range indices are ignored.
    pub fn set_cursor(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write() {
            let rows = guard.view_cached().rows.len();
            if index < rows && guard.cursor != Some(index) {
                guard.cursor = Some(index);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move the cursor up one view row (or onto the first row).
    pub fn cursor_up(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let rows = guard.view_cached().rows.len();
            if rows == 0 {
                return None;
            }
            let next = match guard.cursor {
                Some(0) => return Some(0),
                Some(c) => c - 1,
                None => 0,
            };
            guard.cursor = Some(next);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(next);
        }
        None
    }

    /// Move the cursor down one view row (or onto the first row).
    pub fn cursor_down(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let rows = guard.view_cached().rows.len();
            if rows == 0 {
                return None;
            }
            let next = match guard.cursor {
                Some(c) if c + 1 < rows => c + 1,
                Some(c) => return Some(c),
                None => 0,
            };
            guard.cursor = Some(next);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(next);
        }
        None
    }

    /// Move the cursor to the first view row.
    pub fn cursor_first(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let rows = guard.view_cached().rows.len();
            if rows == 0 {
                return None;
            }
            guard.cursor = Some(0);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(0);
        }
        None
    }

    /// Move the cursor to the last view row.
    pub fn cursor_last(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let rows = guard.view_cached().rows.len();
            if rows == 0 {
                return None;
            }
            guard.cursor = Some(rows - 1);
            self.dirty.store(true, Ordering::SeqCst);
            return Some(rows - 1);
        }
        None
    }

    /// Click a view row: moves the cursor there and fires the row-click
    /// callback. Returns the clicked record.
    pub fn click_row(&self, view_index: usize) -> Option<Record> {
        let mut emit = None;
        let mut clicked = None;
        if let Ok(mut guard) = self.inner.write() {
            let view = guard.view_cached();
            let record = view.rows.get(view_index).cloned()?;
            guard.cursor = Some(view_index);
            self.dirty.store(true, Ordering::SeqCst);
            emit = guard.callbacks.row_click.clone().map(|cb| (cb, record.clone()));
            clicked = Some(record);
        }
        if let Some((cb, record)) = emit {
            cb(&record);
        }
        clicked
    }

    // -------------------------------------------------------------------------
    // Callbacks
    // -------------------------------------------------------------------------

    /// Register the selection-change callback.
    pub fn on_selection_change(&self, f: impl Fn(&[Record]) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.write() {
            guard.callbacks.selection_change = Some(Arc::new(f));
        }
    }

    /// Register the row-click callback.
    pub fn on_row_click(&self, f: impl Fn(&Record) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.write() {
            guard.callbacks.row_click = Some(Arc::new(f));
        }
    }

    /// Register the sort-change callback.
    pub fn on_sort(&self, f: impl Fn(Option<(&str, SortDirection)>) + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.write() {
            guard.callbacks.sort_change = Some(Arc::new(f));
        }
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Derive (or reuse) the view of the current state.
    pub fn view(&self) -> Arc<TableView> {
        self.inner
            .write()
            .map(|mut g| g.view_cached())
            .unwrap_or_else(|_| Arc::new(TableView::unavailable()))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for DataTable {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
