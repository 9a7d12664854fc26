//! FieldError for Record accessors

/// Error type for typed field access on [`Record`](crate::Record).
///
/// Absent fields and explicit nulls are not errors; the typed getters return
/// `Ok(None)` for both.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The field exists but has a different type than requested.
    #[error("Field '{field}' type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
