//! # Row Renderer
//!
//! Pure functions from (row, column layout, cursor) to draw ops: bordered
//! cells of the planned width and fixed height, alternating background
//! tint keyed on data-row parity, and left-aligned, vertically centered
//! text cut to the cell interior. Nothing here touches the paginator —
//! placement is the composer's job.

use crate::layout::LayoutConfig;
use crate::layout::columns::ColumnLayout;
use crate::layout::cursor::PageCursor;
use crate::plan::{DrawOp, Shade};
use crate::report::Row;

/// Ops for the column header row: header-shaded, bordered, bold labels.
pub fn header_ops(layout: &ColumnLayout, cursor: PageCursor, cfg: &LayoutConfig) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let h = cfg.row_height;
    let inner = layout.width - 2.0 * cfg.cell_inset;

    for col in &layout.columns {
        ops.push(DrawOp::Fill {
            x: col.x,
            y: cursor.y,
            w: layout.width,
            h,
            shade: Shade::Header,
        });
        ops.push(DrawOp::Rect {
            x: col.x,
            y: cursor.y,
            w: layout.width,
            h,
        });
        let label = cfg.fit_text(&col.label, inner, cfg.body_size);
        if !label.is_empty() {
            ops.push(DrawOp::Text {
                x: col.x + cfg.cell_inset,
                y: cursor.y + cfg.baseline_in_box(h, cfg.body_size),
                size: cfg.body_size,
                bold: true,
                content: label,
            });
        }
    }
    ops
}

/// Ops for one data (or synthetic total) row.
///
/// `index` is the row's position within its section — parity decides the
/// band tint (even = tinted), and the choice is deterministic for a given
/// index. Cells whose key is absent from the row render as empty (border
/// and tint only). `emphasis` sets the text bold (total rows).
pub fn row_ops(
    row: &Row,
    layout: &ColumnLayout,
    cursor: PageCursor,
    index: usize,
    emphasis: bool,
    cfg: &LayoutConfig,
) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let h = cfg.row_height;
    let inner = layout.width - 2.0 * cfg.cell_inset;
    let banded = index % 2 == 0;

    for col in &layout.columns {
        if banded {
            ops.push(DrawOp::Fill {
                x: col.x,
                y: cursor.y,
                w: layout.width,
                h,
                shade: Shade::Band,
            });
        }
        ops.push(DrawOp::Rect {
            x: col.x,
            y: cursor.y,
            w: layout.width,
            h,
        });

        let text = row
            .get(&col.key)
            .map(|v| v.to_string())
            .unwrap_or_default();
        let text = cfg.fit_text(&text, inner, cfg.body_size);
        if !text.is_empty() {
            ops.push(DrawOp::Text {
                x: col.x + cfg.cell_inset,
                y: cursor.y + cfg.baseline_in_box(h, cfg.body_size),
                size: cfg.body_size,
                bold: emphasis,
                content: text,
            });
        }
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::columns::plan_columns;
    use crate::report::ColumnSpec;

    fn layout3(cfg: &LayoutConfig) -> ColumnLayout {
        plan_columns(
            &[
                ColumnSpec::new("date", "Date"),
                ColumnSpec::new("product", "Product"),
                ColumnSpec::new("revenue", "Revenue"),
            ],
            cfg,
        )
    }

    fn at_top(cfg: &LayoutConfig) -> PageCursor {
        PageCursor {
            page: 0,
            y: cfg.top_margin,
        }
    }

    #[test]
    fn test_header_is_bold_and_shaded() {
        let cfg = LayoutConfig::default();
        let ops = header_ops(&layout3(&cfg), at_top(&cfg), &cfg);
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, DrawOp::Fill { shade: Shade::Header, .. }))
                .count(),
            3
        );
        assert!(
            ops.iter()
                .all(|op| !matches!(op, DrawOp::Text { bold: false, .. }))
        );
        assert!(
            ops.iter()
                .any(|op| matches!(op, DrawOp::Text { content, .. } if content == "Revenue"))
        );
    }

    #[test]
    fn test_even_rows_are_banded() {
        let cfg = LayoutConfig::default();
        let layout = layout3(&cfg);
        let row = Row::new().with("date", "2024-01-01");

        let even = row_ops(&row, &layout, at_top(&cfg), 0, false, &cfg);
        let odd = row_ops(&row, &layout, at_top(&cfg), 1, false, &cfg);

        assert_eq!(
            even.iter()
                .filter(|op| matches!(op, DrawOp::Fill { shade: Shade::Band, .. }))
                .count(),
            3
        );
        assert!(!odd.iter().any(|op| matches!(op, DrawOp::Fill { .. })));
    }

    #[test]
    fn test_parity_is_deterministic() {
        let cfg = LayoutConfig::default();
        let layout = layout3(&cfg);
        let row = Row::new().with("product", "A");
        let a = row_ops(&row, &layout, at_top(&cfg), 4, false, &cfg);
        let b = row_ops(&row, &layout, at_top(&cfg), 4, false, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_key_renders_empty_cell() {
        let cfg = LayoutConfig::default();
        let layout = layout3(&cfg);
        let row = Row::new().with("date", "2024-01-01");
        let ops = row_ops(&row, &layout, at_top(&cfg), 1, false, &cfg);
        // Three borders, one text
        assert_eq!(
            ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count(),
            3
        );
        assert_eq!(
            ops.iter().filter(|op| matches!(op, DrawOp::Text { .. })).count(),
            1
        );
    }

    #[test]
    fn test_text_is_truncated_to_cell_interior() {
        let cfg = LayoutConfig::default();
        let layout = layout3(&cfg);
        let long = "x".repeat(300);
        let row = Row::new().with("product", long.as_str());
        let ops = row_ops(&row, &layout, at_top(&cfg), 0, false, &cfg);
        let text = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .unwrap();
        assert!(
            cfg.text_width(&text, cfg.body_size) <= layout.width - 2.0 * cfg.cell_inset
        );
        assert!(text.len() < 300);
    }

    #[test]
    fn test_text_is_vertically_centered() {
        let cfg = LayoutConfig::default();
        let layout = layout3(&cfg);
        let cursor = at_top(&cfg);
        let row = Row::new().with("date", "x");
        let ops = row_ops(&row, &layout, cursor, 0, false, &cfg);
        let baseline = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                _ => None,
            })
            .unwrap();
        assert!(baseline > cursor.y);
        assert!(baseline < cursor.y + cfg.row_height);
    }

    #[test]
    fn test_emphasis_sets_bold() {
        let cfg = LayoutConfig::default();
        let layout = layout3(&cfg);
        let row = Row::new().with("date", "Total:").with("revenue", 150);
        let ops = row_ops(&row, &layout, at_top(&cfg), 2, true, &cfg);
        assert!(
            ops.iter()
                .filter_map(|op| match op {
                    DrawOp::Text { bold, .. } => Some(*bold),
                    _ => None,
                })
                .all(|b| b)
        );
    }
}
