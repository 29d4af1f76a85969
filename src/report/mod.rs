//! # Unified Report Model
//!
//! A single type hierarchy that is both the Rust API and the JSON API.
//! `ReportRequest` is constructible in Rust and deserializable from JSON.
//!
//! ```
//! use planilla::report::{CellValue, ColumnSpec, ReportRequest, ReportSection, Row};
//!
//! // Rust construction
//! let request = ReportRequest {
//!     title: "Sales Report".into(),
//!     date_range: "2024-01-01 to 2024-01-31".into(),
//!     sections: vec![ReportSection {
//!         name: "Sales".into(),
//!         columns: vec![
//!             ColumnSpec::new("date", "Date"),
//!             ColumnSpec::new("revenue", "Revenue"),
//!         ],
//!         rows: vec![Row::new().with("date", "2024-01-01").with("revenue", 100)],
//!         totals_column: Some("revenue".into()),
//!     }],
//! };
//!
//! // JSON deserialization produces the same type
//! let from_json: ReportRequest = serde_json::from_str(
//!     r#"{"title":"Sales Report","sections":[]}"#,
//! ).unwrap();
//! assert_eq!(from_json.title, request.title);
//! ```
//!
//! Rows arrive here already resolved and joined by the data-access layer;
//! [`normalize`] turns raw domain records into [`Row`]s, and
//! [`totals`] computes the synthetic subtotal rows.

pub mod normalize;
pub mod totals;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One export request: a titled, date-stamped sequence of sections.
///
/// Created once per export action, treated as immutable during the render
/// pass, and discarded after the document is emitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Document title, centered at the top of page 1.
    pub title: String,
    /// Human-readable date range banner (e.g. "2024-01-01 to 2024-01-31").
    /// Empty string = no banner line.
    #[serde(default)]
    pub date_range: String,
    /// Sections in render order.
    #[serde(default)]
    pub sections: Vec<ReportSection>,
}

/// One homogeneous table within the document: its own columns, rows and
/// optional subtotal column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section label (e.g. "Sales", "Damages", "Returns").
    pub name: String,
    /// Columns in left-to-right order. Only the first
    /// [`LayoutConfig::max_columns`](crate::layout::LayoutConfig::max_columns)
    /// are rendered.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Key of the numeric column to subtotal, if any.
    #[serde(default)]
    pub totals_column: Option<String>,
}

/// A column declaration. Order defines rendering order; the key links
/// cells to columns, the label is what the header row shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A primitive display value, pre-formatted by the row normalizer
/// (currency already rounded to two decimals).
///
/// JSON numbers deserialize as `Number`, everything stringy as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Numeric view of the cell. `Text` is not coerced; the totals
    /// aggregator treats it as 0.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// Integral numbers render without decimals, fractional ones with
    /// exactly two. Text renders verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{:.2}", n)
                }
            }
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

/// An ordered mapping from column key to display value.
///
/// Immutable once produced by the normalizer. Serializes as a JSON object;
/// deserialization preserves document order. Lookup is by key, so internal
/// order never affects layout (rendering order comes from [`ColumnSpec`]s).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Insert a cell, replacing any existing cell with the same key.
    pub fn insert(&mut self, key: String, value: CellValue) {
        if let Some(cell) = self.cells.iter_mut().find(|(k, _)| *k == key) {
            cell.1 = value;
        } else {
            self.cells.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, CellValue)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, CellValue)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (k, v) in &self.cells {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = Row;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of column keys to cell values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
                let mut cells = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, CellValue>()? {
                    cells.push((key, value));
                }
                Ok(Row { cells })
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}
