//! Field values: scalar text, numbers, or tables of positional rows.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{COLUMN_KEY_PREFIX, COLUMN_SEPARATOR};

/// The value of one project field.
///
/// Serialized untagged so the JSON shape matches what the UI stores:
/// a string, a number, or an array of `{"col0": .., "col1": ..}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Table(Vec<TableRow>),
}

impl FieldValue {
    /// Empty strings and empty tables count as "not filled". Numbers never do.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
            Self::Table(rows) => rows.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[TableRow]> {
        match self {
            Self::Table(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Table(rows) => {
                let lines: Vec<String> = rows.iter().map(TableRow::render).collect();
                f.write_str(&lines.join("\n"))
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<TableRow>> for FieldValue {
    fn from(rows: Vec<TableRow>) -> Self {
        Self::Table(rows)
    }
}

/// Render a number the way the UI displays it: integral values without a
/// fractional part (`2025`, not `2025.0`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// One table row, keyed by positional column (`col0`, `col1`, ...).
///
/// Deserialization accepts non-string cells (numbers, booleans) and stores
/// their textual form; `null` cells are treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, serde_json::Value>")]
pub struct TableRow(BTreeMap<String, String>);

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from cells in column order.
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row = Self::new();
        for (index, cell) in cells.into_iter().enumerate() {
            row.set(index, cell);
        }
        row
    }

    /// Positional key for a column index.
    pub fn column_key(index: usize) -> String {
        format!("{COLUMN_KEY_PREFIX}{index}")
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&Self::column_key(index)).map(String::as_str)
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        self.0.insert(Self::column_key(index), value.into());
    }

    /// Cells from `col0` upwards, stopping at the first missing index.
    pub fn leading_cells(&self) -> Vec<&str> {
        (0..)
            .map(|index| self.get(index))
            .take_while(Option::is_some)
            .flatten()
            .collect()
    }

    /// Pipe-joined leading cells, the row format the model was trained on.
    pub fn render(&self) -> String {
        self.leading_cells().join(COLUMN_SEPARATOR)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for TableRow {
    fn from(raw: BTreeMap<String, serde_json::Value>) -> Self {
        let cells = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                Some((key, text))
            })
            .collect();
        Self(cells)
    }
}
