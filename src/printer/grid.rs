//! Column and row model of a printable grid.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// One grid row: field name to value.
pub type Record = Map<String, Value>;

// ============================================================================
// Align
// ============================================================================

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Returns the CSS `text-align` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

// ============================================================================
// Column
// ============================================================================

/// A grid column, or a group header holding sub-columns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column id. Cells are keyed by it; falls back to `data_index`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Header text. Inserted as markup.
    #[serde(default)]
    pub text: String,

    /// Record field displayed in this column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_index: Option<String>,

    #[serde(default)]
    pub align: Align,

    #[serde(default)]
    pub hidden: bool,

    /// Sub-columns of a group header.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
}

impl Column {
    /// Creates a left-aligned column showing `data_index`.
    pub fn new(text: impl Into<String>, data_index: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data_index: Some(data_index.into()),
            ..Self::default()
        }
    }

    /// Creates a group header over `columns`.
    pub fn group(text: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            text: text.into(),
            columns,
            ..Self::default()
        }
    }

    /// Sets an explicit id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets whether the column is hidden.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Returns the id cells are keyed by.
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.data_index.as_deref())
    }

    /// Returns the data index if it is set and non-empty.
    pub fn data_index(&self) -> Option<&str> {
        self.data_index.as_deref().filter(|d| !d.is_empty())
    }

    /// Returns true if the column ends up in the printed table.
    pub fn is_printable(&self) -> bool {
        !self.hidden && self.data_index().is_some()
    }
}

/// Replaces group headers by their sub-columns (one level).
pub fn flatten_columns(columns: &[Column]) -> Vec<&Column> {
    let mut flat = Vec::with_capacity(columns.len());
    for column in columns {
        if column.columns.is_empty() {
            flat.push(column);
        } else {
            flat.extend(column.columns.iter());
        }
    }
    flat
}

// ============================================================================
// Grid
// ============================================================================

/// A grid snapshot: title, column model and rows.
///
/// # JSON Format
///
/// ```json
/// {
///   "title": "Orders",
///   "columns": [
///     { "text": "Name", "dataIndex": "name" },
///     { "text": "Price", "dataIndex": "price", "align": "right" }
///   ],
///   "rows": [ { "name": "Tea", "price": 3.5 } ],
///   "rowBody": "<p>{notes}</p>"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub columns: Vec<Column>,

    #[serde(default)]
    pub rows: Vec<Record>,

    /// Row expander template printed below each row. `{field}` placeholders
    /// are filled from the row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_body: Option<String>,
}

impl Grid {
    /// Creates an empty grid with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Appends a column.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends a row.
    pub fn with_row(mut self, row: Record) -> Self {
        self.rows.push(row);
        self
    }

    /// Sets the row expander template.
    pub fn with_row_body(mut self, template: impl Into<String>) -> Self {
        self.row_body = Some(template.into());
        self
    }

    /// Deserializes a grid from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
