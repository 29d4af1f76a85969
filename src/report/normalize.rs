//! # Row Normalizer
//!
//! Converts raw domain records (sales, damages, returns, bottle movements,
//! income/expense entries) into uniform [`Row`]s. Records arrive as
//! [`serde_json::Value`] objects from the data-access layer, already joined
//! against related entities; a [`FieldMap`] describes which source fields
//! become which column keys.
//!
//! Missing nested references (e.g. a sale whose related product was
//! deleted) resolve to placeholder values rather than failing. The
//! normalizer only errors when the record itself cannot hold cells at all
//! (a null primary row).

use crate::error::ReportError;
use crate::report::{CellValue, Row};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a source field is coerced into a display value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// Verbatim text; numbers and booleans are stringified.
    #[default]
    Text,
    /// Numeric value; numeric strings are parsed.
    Number,
    /// Numeric value rounded to two decimals (stays numeric so the totals
    /// aggregator can sum it).
    Currency,
    /// ISO date (`YYYY-MM-DD`); RFC 3339 timestamps are re-formatted,
    /// unparseable inputs pass through verbatim.
    Date,
}

/// One column binding: which source field feeds which column key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Target column key.
    pub column: String,
    /// Dot path into the source record (e.g. `product.name` for a joined
    /// entity).
    pub path: String,
    /// Placeholder when the source field is missing or null. Defaults by
    /// format: `"N/A"` for text/date, `0` for numbers.
    #[serde(default)]
    pub fallback: Option<CellValue>,
    #[serde(default)]
    pub format: ValueFormat,
}

impl FieldBinding {
    pub fn new(column: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            path: path.into(),
            fallback: None,
            format: ValueFormat::Text,
        }
    }

    pub fn format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn fallback(mut self, fallback: impl Into<CellValue>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// The value used when the source field is absent.
    fn placeholder(&self) -> CellValue {
        if let Some(fallback) = &self.fallback {
            return fallback.clone();
        }
        match self.format {
            ValueFormat::Text | ValueFormat::Date => CellValue::Text("N/A".into()),
            ValueFormat::Number | ValueFormat::Currency => CellValue::Number(0.0),
        }
    }
}

/// An ordered set of field bindings describing one record shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMap {
    pub fields: Vec<FieldBinding>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style binding append.
    pub fn bind(mut self, binding: FieldBinding) -> Self {
        self.fields.push(binding);
        self
    }

    /// Normalize one domain record into a [`Row`].
    ///
    /// Cells are produced in binding order. Fails only when the record is
    /// not a JSON object (null primary row) — individual missing fields
    /// become placeholders, never errors.
    pub fn normalize(&self, record: &Value) -> Result<Row, ReportError> {
        if !record.is_object() {
            return Err(ReportError::InvalidRecord(format!(
                "expected object record, got {}",
                json_kind(record)
            )));
        }

        let mut row = Row::new();
        for binding in &self.fields {
            let value = lookup(record, &binding.path)
                .and_then(|v| coerce(v, binding.format))
                .unwrap_or_else(|| binding.placeholder());
            row.insert(binding.column.clone(), value);
        }
        Ok(row)
    }

    /// Normalize a batch of records, failing on the first invalid one.
    pub fn normalize_all(&self, records: &[Value]) -> Result<Vec<Row>, ReportError> {
        records.iter().map(|r| self.normalize(r)).collect()
    }
}

impl FromIterator<FieldBinding> for FieldMap {
    fn from_iter<T: IntoIterator<Item = FieldBinding>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Walk a dot path through nested objects. Null leaves count as absent.
fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Coerce a present source value. `None` means "treat as absent".
fn coerce(value: &Value, format: ValueFormat) -> Option<CellValue> {
    match format {
        ValueFormat::Text => match value {
            Value::String(s) => Some(CellValue::Text(s.clone())),
            Value::Number(n) => Some(CellValue::Text(
                CellValue::Number(n.as_f64()?).to_string(),
            )),
            Value::Bool(b) => Some(CellValue::Text(b.to_string())),
            _ => None,
        },
        ValueFormat::Number => as_f64(value).map(CellValue::Number),
        ValueFormat::Currency => {
            as_f64(value).map(|n| CellValue::Number((n * 100.0).round() / 100.0))
        }
        ValueFormat::Date => match value {
            Value::String(s) => Some(CellValue::Text(iso_date(s))),
            _ => None,
        },
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Re-format a date-ish string as `YYYY-MM-DD`; pass through anything
/// unparseable.
fn iso_date(s: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.format("%Y-%m-%d").to_string();
    }
    s.to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
