//! Pagination over the sorted row set.

/// Number of pages needed for `len` rows at `page_size` rows per page.
///
/// Zero rows is zero pages; callers treat that as a single empty page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    debug_assert!(page_size > 0, "page size must be greater than zero");
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp a 1-based page number to the displayable range.
///
/// The result is always at least 1, and never past the last non-empty page,
/// so slicing with it never yields an empty page while rows exist.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The contiguous slice of `sorted` shown on `page`.
///
/// `page` is clamped with [`clamp_page`] before slicing.
pub fn paginate(sorted: &[usize], page: usize, page_size: usize) -> &[usize] {
    debug_assert!(page_size > 0, "page size must be greater than zero");
    if page_size == 0 {
        return &[];
    }
    let effective = clamp_page(page, page_count(sorted.len(), page_size));
    let start = (effective - 1) * page_size;
    let end = (start + page_size).min(sorted.len());
    if start >= sorted.len() {
        &[]
    } else {
        &sorted[start..end]
    }
}
