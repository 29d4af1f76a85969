//! # Column Layout Planner
//!
//! Computes the fixed per-column width for a section's table. Every
//! rendered column gets the same width; the declared column list is capped
//! at [`LayoutConfig::max_columns`] and the drop is reported on the layout
//! so callers can surface it.

use crate::layout::LayoutConfig;
use crate::report::ColumnSpec;

/// A column with its resolved x origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedColumn {
    pub key: String,
    pub label: String,
    pub x: f32,
}

/// The planned grid for one section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnLayout {
    /// Rendered columns, left to right. At most `max_columns` entries.
    pub columns: Vec<PlannedColumn>,
    /// Uniform column width in mm.
    pub width: f32,
    /// True when the section declared more columns than are rendered.
    pub truncated: bool,
}

impl ColumnLayout {
    /// An empty section has no table at all, only its title.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total rendered table width.
    pub fn table_width(&self) -> f32 {
        self.width * self.columns.len() as f32
    }
}

/// Plan the grid: `width = content_width / min(columns, max_columns)`.
pub fn plan_columns(specs: &[ColumnSpec], cfg: &LayoutConfig) -> ColumnLayout {
    if specs.is_empty() {
        return ColumnLayout::default();
    }

    let rendered = specs.len().min(cfg.max_columns.max(1));
    let width = cfg.content_width() / rendered as f32;

    let columns = specs
        .iter()
        .take(rendered)
        .enumerate()
        .map(|(i, spec)| PlannedColumn {
            key: spec.key.clone(),
            label: spec.label.clone(),
            x: cfg.margin + i as f32 * width,
        })
        .collect();

    ColumnLayout {
        columns,
        width,
        truncated: specs.len() > rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(n: usize) -> Vec<ColumnSpec> {
        (0..n)
            .map(|i| ColumnSpec::new(format!("c{i}"), format!("Col {i}")))
            .collect()
    }

    #[test]
    fn test_uniform_width() {
        let cfg = LayoutConfig::default();
        let layout = plan_columns(&specs(4), &cfg);
        assert_eq!(layout.columns.len(), 4);
        assert_eq!(layout.width, cfg.content_width() / 4.0);
        assert!(!layout.truncated);
    }

    #[test]
    fn test_cap_at_max_columns() {
        let cfg = LayoutConfig::default();
        let layout = plan_columns(&specs(8), &cfg);
        assert_eq!(layout.columns.len(), 5);
        assert_eq!(layout.width, cfg.content_width() / 5.0);
        assert!(layout.truncated);
        // Columns beyond the cap are never planned for drawing
        assert!(layout.columns.iter().all(|c| c.key != "c5"));
    }

    #[test]
    fn test_x_origins_march_right() {
        let cfg = LayoutConfig::default();
        let layout = plan_columns(&specs(3), &cfg);
        assert_eq!(layout.columns[0].x, cfg.margin);
        for pair in layout.columns.windows(2) {
            assert!((pair[1].x - pair[0].x - layout.width).abs() < 1e-4);
        }
    }

    #[test]
    fn test_empty_section_short_circuits() {
        let cfg = LayoutConfig::default();
        let layout = plan_columns(&[], &cfg);
        assert!(layout.is_empty());
        assert!(!layout.truncated);
        assert_eq!(layout.table_width(), 0.0);
    }

    #[test]
    fn test_custom_cap() {
        let cfg = LayoutConfig {
            max_columns: 3,
            ..Default::default()
        };
        let layout = plan_columns(&specs(4), &cfg);
        assert_eq!(layout.columns.len(), 3);
        assert!(layout.truncated);
    }

    #[test]
    fn test_single_column_fills_content() {
        let cfg = LayoutConfig::default();
        let layout = plan_columns(&specs(1), &cfg);
        assert_eq!(layout.table_width(), cfg.content_width());
    }
}
