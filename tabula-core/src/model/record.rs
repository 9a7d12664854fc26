//! Dynamic record type

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::FieldError;

/// One data row, held as a dynamic mapping from field name to [`Value`].
///
/// Records are opaque to the grid engine: identity comes from a
/// caller-designated key field (see [`Record::key`]), and columns decide
/// which fields are read. Typed getters provide safe access with proper
/// error handling.
///
/// # Example
///
/// ```
/// use tabula_core::Record;
///
/// let record = Record::new()
///     .set("id", 7i64)
///     .set("name", "Contoso")
///     .set("score", 12.5);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Contoso"));
/// assert_eq!(record.key("id"), Some("7".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Sets a field value, builder-style.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record has a value for the field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the names of all fields present on this record.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields on this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Typed accessors
    // =========================================================================

    /// Returns a string field.
    ///
    /// `Ok(None)` if the field is absent or null; `Err` on type mismatch.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(FieldError::type_mismatch(field, "string", other.type_name())),
        }
    }

    /// Returns an integer field.
    pub fn get_i64(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Returns a numeric field as `f64` (accepts both `Int` and `Float`).
    pub fn get_f64(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n as f64)),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Returns a boolean field.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    // =========================================================================
    // Engine views
    // =========================================================================

    /// The string form of a field, as searched by the filter operation.
    ///
    /// Absent and null fields render as the empty string.
    pub fn display_string(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(Value::display_string)
            .unwrap_or_default()
    }

    /// The record's identity under the designated key field.
    ///
    /// Returns `None` when the key field is absent or null. Key values must
    /// be unique across a dataset; the canonical string form keeps them
    /// hashable regardless of the underlying value type.
    pub fn key(&self, key_field: &str) -> Option<String> {
        match self.fields.get(key_field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.display_string()),
        }
    }
}
