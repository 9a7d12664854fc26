//! ConfigError for caller contract violations

/// Error type for table configuration problems.
///
/// The grid engine is total over well-formed input; these are caller
/// contract violations surfaced by validation. The engine itself fails
/// loudly in debug builds and clamps to safe defaults in release builds
/// rather than crash.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Two records share the same key-field value.
    #[error("Duplicate key '{key}' in dataset")]
    DuplicateKey { key: String },

    /// A record lacks the key field, or it is null.
    #[error("Record at index {index} has no value for key field '{field}'")]
    MissingKey { field: String, index: usize },

    /// Page size must be at least 1.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// A sort or search field that no column declares.
    #[error("Unknown column '{key}'")]
    UnknownColumn { key: String },
}
