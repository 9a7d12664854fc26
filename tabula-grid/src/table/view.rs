//! Derived table view and its memoization.

use std::sync::Arc;

use tabula_core::Record;

use crate::filter::filter;
use crate::page::{clamp_page, page_count, paginate};
use crate::sort::sort_filtered;

use super::state::TableInner;

/// Why a view has no rows to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// The dataset itself is empty.
    NoData,
    /// The dataset has rows but none match the current search.
    NoMatches,
}

/// The materialized result of `filter -> sort -> paginate`.
///
/// A view is a snapshot: it holds clones of the visible records and the
/// pagination figures a caller needs to render page controls. Selection and
/// cursor are queried from the [`DataTable`](super::DataTable) directly so
/// they can change without invalidating the view.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Records visible on the effective page, in display order.
    pub rows: Vec<Record>,
    /// Key of each visible record, parallel to `rows`.
    pub row_keys: Vec<String>,
    /// The effective (clamped) 1-based page the rows were sliced from.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total pages over the filtered set (at least 1).
    pub page_count: usize,
    /// Number of records surviving the filter.
    pub filtered_len: usize,
    /// Number of records in the dataset.
    pub total_len: usize,
    /// Set when there are no rows to show.
    pub empty: Option<EmptyKind>,
}

impl TableView {
    /// A degenerate empty view, used when the state lock is poisoned.
    pub(super) fn unavailable() -> Self {
        Self {
            rows: Vec::new(),
            row_keys: Vec::new(),
            page: 1,
            page_size: 0,
            page_count: 1,
            filtered_len: 0,
            total_len: 0,
            empty: Some(EmptyKind::NoData),
        }
    }

    /// Whether a later page exists.
    pub fn has_next_page(&self) -> bool {
        self.page < self.page_count
    }

    /// Whether an earlier page exists.
    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}

/// Derive the view for the current state of `inner`.
///
/// Recomputed eagerly on every relevant change; [`TableInner`] caches the
/// result keyed on its revision counter so unchanged state returns the same
/// snapshot without rework.
pub(super) fn derive_view(inner: &TableInner) -> Arc<TableView> {
    let search_fields = inner.effective_search_fields();
    let filtered = if inner.searchable {
        filter(
            &inner.data,
            &inner.search_query,
            &search_fields,
            inner.search_mode,
        )
    } else {
        (0..inner.data.len()).collect()
    };

    let sorted = match &inner.sort {
        Some((column, direction)) => sort_filtered(&inner.data, &filtered, column, *direction),
        None => filtered,
    };

    let filtered_len = sorted.len();
    let pages = page_count(filtered_len, inner.page_size).max(1);
    let effective = clamp_page(inner.page, pages);
    let slice = paginate(&sorted, inner.page, inner.page_size);

    let rows: Vec<Record> = slice.iter().map(|&i| inner.data[i].clone()).collect();
    let row_keys = rows
        .iter()
        .map(|r| r.key(&inner.key_field).unwrap_or_default())
        .collect();

    let empty = if inner.data.is_empty() {
        Some(EmptyKind::NoData)
    } else if filtered_len == 0 {
        Some(EmptyKind::NoMatches)
    } else {
        None
    };

    log::trace!(
        "derived view: page {}/{} ({} of {} rows match)",
        effective,
        pages,
        filtered_len,
        inner.data.len()
    );

    Arc::new(TableView {
        rows,
        row_keys,
        page: effective,
        page_size: inner.page_size,
        page_count: pages,
        filtered_len,
        total_len: inner.data.len(),
        empty,
    })
}
