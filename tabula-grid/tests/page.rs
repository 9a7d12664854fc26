//! Tests for pagination slicing and clamping.

use tabula_grid::page::{clamp_page, page_count, paginate};

#[test]
fn test_page_count() {
    assert_eq!(page_count(0, 10), 0);
    assert_eq!(page_count(1, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(25, 10), 3);
}

#[test]
fn test_clamp_page() {
    assert_eq!(clamp_page(0, 3), 1);
    assert_eq!(clamp_page(1, 3), 1);
    assert_eq!(clamp_page(3, 3), 3);
    assert_eq!(clamp_page(99, 3), 3);
    // Zero pages still displays page 1.
    assert_eq!(clamp_page(5, 0), 1);
}

#[test]
fn test_slice_bounds() {
    let rows: Vec<usize> = (0..25).collect();
    assert_eq!(paginate(&rows, 1, 10), &rows[0..10]);
    assert_eq!(paginate(&rows, 2, 10), &rows[10..20]);
    assert_eq!(paginate(&rows, 3, 10), &rows[20..25]);
}

#[test]
fn test_page_past_end_clamps_to_last() {
    let rows: Vec<usize> = (0..25).collect();
    // Never an empty page while rows exist.
    assert_eq!(paginate(&rows, 9, 10), &rows[20..25]);
}

#[test]
fn test_empty_input_yields_empty_page() {
    let rows: Vec<usize> = Vec::new();
    assert!(paginate(&rows, 1, 10).is_empty());
    assert!(paginate(&rows, 7, 10).is_empty());
}

#[test]
fn test_pages_reconstruct_input_exactly() {
    let rows: Vec<usize> = (0..23).collect();
    let size = 5;
    let mut rebuilt = Vec::new();
    for page in 1..=page_count(rows.len(), size) {
        rebuilt.extend_from_slice(paginate(&rows, page, size));
    }
    assert_eq!(rebuilt, rows);
}
