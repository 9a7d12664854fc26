//! Column descriptors for the grid.

use std::sync::Arc;

use tabula_core::{Record, Value};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A pure projection from `(value, record, row_index)` to display text.
///
/// Formatters must not mutate the record; they are called once per visible
/// cell when a view is materialized into text.
pub type CellFormatter = Arc<dyn Fn(&Value, &Record, usize) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: which record field the column
/// reads, its header text, whether it participates in sorting, and how its
/// cells are formatted.
///
/// # Examples
///
/// ```
/// use tabula_grid::column::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("id", "ID").width(8),
///     Column::new("name", "Name").sortable(),
///     Column::new("score", "Score").sortable().align(Alignment::Right),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Record field this column reads.
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Whether this column is sortable.
    pub sortable: bool,
    /// Suggested width in display columns, if the caller wants one.
    pub width: Option<u16>,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Optional cell formatter.
    pub formatter: Option<CellFormatter>,
}

impl Column {
    /// Create a new column reading `key`, labeled `header`.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
            formatter: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a suggested width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a cell formatter.
    pub fn formatter(
        mut self,
        f: impl Fn(&Value, &Record, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// The display text for this column's cell on `record` at `row_index`.
    ///
    /// Uses the formatter when one is set, otherwise the value's canonical
    /// string form.
    pub fn cell_text(&self, record: &Record, row_index: usize) -> String {
        let value = record.get(&self.key).cloned().unwrap_or(Value::Null);
        match &self.formatter {
            Some(f) => f(&value, record, row_index),
            None => value.display_string(),
        }
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
