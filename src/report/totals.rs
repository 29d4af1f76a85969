//! # Totals Aggregator
//!
//! Sums a section's designated numeric column and produces the synthetic
//! `Total:` row appended to the table before rendering. Each dataset
//! category (sales, damages, income, expenses) computes its own subtotal;
//! the document carries one grand total across all of them.

use crate::report::{CellValue, ReportSection, Row};

/// Label placed in the section's first column of the synthetic row.
pub const TOTAL_LABEL: &str = "Total:";

fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// Subtotal of the section's totals column over ALL input rows.
///
/// Non-numeric and missing cells count as 0. Returns `None` when the
/// section declares no totals column or has no rows (nothing to total).
pub fn section_subtotal(section: &ReportSection) -> Option<f64> {
    let key = section.totals_column.as_deref()?;
    if section.rows.is_empty() {
        return None;
    }
    let sum = section
        .rows
        .iter()
        .map(|row| row.get(key).and_then(CellValue::as_number).unwrap_or(0.0))
        .sum();
    Some(round2(sum))
}

/// The synthetic total row for a section, or `None` when no subtotal
/// applies.
///
/// The row holds `Total:` in the section's first column and the sum in the
/// totals column; every other column stays empty. When the first column IS
/// the totals column, the sum wins and no label cell is emitted.
pub fn total_row(section: &ReportSection) -> Option<Row> {
    let subtotal = section_subtotal(section)?;
    let key = section.totals_column.as_deref()?;

    let mut row = Row::new();
    if let Some(first) = section.columns.first() {
        if first.key != key {
            row.insert(first.key.clone(), CellValue::Text(TOTAL_LABEL.into()));
        }
    }
    row.insert(key.to_string(), CellValue::Number(subtotal));
    Some(row)
}

/// Sum of every section subtotal in the document.
pub fn grand_total(sections: &[ReportSection]) -> f64 {
    round2(sections.iter().filter_map(section_subtotal).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ColumnSpec;

    fn sales_section() -> ReportSection {
        ReportSection {
            name: "Sales".into(),
            columns: vec![
                ColumnSpec::new("date", "Date"),
                ColumnSpec::new("product", "Product"),
                ColumnSpec::new("revenue", "Revenue"),
            ],
            rows: vec![
                Row::new()
                    .with("date", "2024-01-01")
                    .with("product", "A")
                    .with("revenue", 100),
                Row::new()
                    .with("date", "2024-01-02")
                    .with("product", "B")
                    .with("revenue", 50),
            ],
            totals_column: Some("revenue".into()),
        }
    }

    #[test]
    fn test_subtotal_sums_column() {
        assert_eq!(section_subtotal(&sales_section()), Some(150.0));
    }

    #[test]
    fn test_subtotal_coerces_non_numeric_to_zero() {
        let mut section = sales_section();
        section.rows.push(Row::new().with("revenue", "refunded"));
        section.rows.push(Row::new().with("product", "no revenue cell"));
        assert_eq!(section_subtotal(&section), Some(150.0));
    }

    #[test]
    fn test_subtotal_none_without_totals_column() {
        let mut section = sales_section();
        section.totals_column = None;
        assert_eq!(section_subtotal(&section), None);
        assert!(total_row(&section).is_none());
    }

    #[test]
    fn test_no_total_row_for_empty_section() {
        let mut section = sales_section();
        section.rows.clear();
        assert_eq!(section_subtotal(&section), None);
        assert!(total_row(&section).is_none());
    }

    #[test]
    fn test_total_row_shape() {
        let row = total_row(&sales_section()).unwrap();
        assert_eq!(row.get("date"), Some(&CellValue::Text(TOTAL_LABEL.into())));
        assert_eq!(row.get("revenue"), Some(&CellValue::Number(150.0)));
        // All other columns stay empty
        assert_eq!(row.get("product"), None);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_total_row_label_yields_to_totals_column() {
        let mut section = sales_section();
        // Totals column is also the first column
        section.columns = vec![
            ColumnSpec::new("revenue", "Revenue"),
            ColumnSpec::new("date", "Date"),
        ];
        let row = total_row(&section).unwrap();
        assert_eq!(row.get("revenue"), Some(&CellValue::Number(150.0)));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_grand_total_across_sections() {
        let damages = ReportSection {
            name: "Damages".into(),
            columns: vec![ColumnSpec::new("loss", "Loss")],
            rows: vec![Row::new().with("loss", 10.25)],
            totals_column: Some("loss".into()),
        };
        let unkeyed = ReportSection {
            name: "Notes".into(),
            ..Default::default()
        };
        let sections = vec![sales_section(), damages, unkeyed];
        assert_eq!(grand_total(&sections), 160.25);
    }

    #[test]
    fn test_subtotal_rounding() {
        let section = ReportSection {
            name: "S".into(),
            columns: vec![ColumnSpec::new("v", "V")],
            rows: vec![
                Row::new().with("v", 0.1),
                Row::new().with("v", 0.2),
            ],
            totals_column: Some("v".into()),
        };
        assert_eq!(section_subtotal(&section), Some(0.3));
    }
}
