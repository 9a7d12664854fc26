//! Sorting of filtered rows by a column key.

use std::cmp::Ordering;

use tabula_core::{Record, Value};

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Compare two non-null values for sorting.
///
/// Strings compare lexicographically and case-insensitively, with a
/// case-sensitive tie-break to keep the order total; numbers (any mix of
/// int and float) compare numerically; everything else falls back to
/// comparing canonical string forms.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        _ if a.is_numeric() && b.is_numeric() => {
            // as_f64 is Some for both; total_cmp gives a total order.
            let x = a.as_f64().unwrap_or(0.0);
            let y = b.as_f64().unwrap_or(0.0);
            x.total_cmp(&y)
        }
        _ => a.display_string().cmp(&b.display_string()),
    }
}

/// Order `filtered` (indices into `data`) by the values under `column`.
///
/// Returns a new index vector; the input is untouched. The sort is stable:
/// rows with equal keys keep their relative filtered order. Null and absent
/// values sort after every non-null value in both directions, and the order
/// between two nulls is direction-independent.
pub fn sort_filtered(
    data: &[Record],
    filtered: &[usize],
    column: &str,
    direction: SortDirection,
) -> Vec<usize> {
    let mut sorted = filtered.to_vec();
    sorted.sort_by(|&a, &b| {
        let va = data[a].get(column);
        let vb = data[b].get(column);
        match (null_like(va), null_like(vb)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = compare_values(va.unwrap_or(&Value::Null), vb.unwrap_or(&Value::Null));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
        }
    });
    sorted
}

fn null_like(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_null)
}
