//! Tests for selection tracking.

use tabula_grid::selection::{Selection, SelectionMode};

#[test]
fn test_none_mode_rejects_toggle() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::None);
    assert!(!sel.toggle("a".into()));
    assert!(sel.is_empty());
}

#[test]
fn test_single_mode_replaces() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Single);
    assert!(sel.toggle("a".into()));
    assert!(sel.toggle("b".into()));
    assert!(!sel.is_selected(&"a".to_string()));
    assert!(sel.is_selected(&"b".to_string()));
    assert_eq!(sel.len(), 1);
}

#[test]
fn test_single_mode_toggle_off() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Single);
    sel.toggle("a".into());
    sel.toggle("a".into());
    assert!(sel.is_empty());
}

#[test]
fn test_multi_mode_accumulates() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Multi);
    sel.toggle("a".into());
    sel.toggle("b".into());
    assert_eq!(sel.len(), 2);
    sel.toggle("a".into());
    assert!(!sel.is_selected(&"a".to_string()));
    assert!(sel.is_selected(&"b".to_string()));
}

#[test]
fn test_select_all_only_in_multi() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Single);
    assert!(!sel.select_all(["a".to_string(), "b".to_string()]));
    assert!(sel.is_empty());

    let mut sel: Selection<String> = Selection::new(SelectionMode::Multi);
    assert!(sel.select_all(["a".to_string(), "b".to_string()]));
    assert_eq!(sel.len(), 2);
    // Selecting already-selected keys is not a change.
    assert!(!sel.select_all(["a".to_string()]));
}

#[test]
fn test_deselect_all_reports_change() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Multi);
    sel.select_all(["a".to_string(), "b".to_string()]);
    assert!(sel.deselect_all(["a".to_string()]));
    assert!(!sel.deselect_all(["a".to_string()]));
    assert_eq!(sel.len(), 1);
}

#[test]
fn test_contains_all() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Multi);
    sel.select_all(["a".to_string(), "b".to_string()]);
    assert!(sel.contains_all([&"a".to_string(), &"b".to_string()]));
    assert!(!sel.contains_all([&"a".to_string(), &"c".to_string()]));
    assert!(sel.contains_all(std::iter::empty::<&String>()));
}

#[test]
fn test_retain_drops_stale_keys() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Multi);
    sel.select_all(["a".to_string(), "b".to_string(), "c".to_string()]);
    assert!(sel.retain(|k| k != "b"));
    assert_eq!(sel.len(), 2);
    assert!(!sel.retain(|_| true));
}

#[test]
fn test_clear() {
    let mut sel: Selection<String> = Selection::new(SelectionMode::Multi);
    assert!(!sel.clear());
    sel.toggle("a".into());
    assert!(sel.clear());
    assert!(sel.is_empty());
}
