//! # Section Composer
//!
//! Walks a [`ReportRequest`] and emits the full draw plan: document title
//! and date-range banner on page 1, then each section in request order —
//! name line, column header, data rows, synthetic total row — pumped
//! through the paginator's table state machine so every page re-draws the
//! column header.
//!
//! Composition is pure and deterministic: the same request and config
//! always produce the same plan. It never fails; bad records are rejected
//! upstream by the normalizer and backend failures happen downstream in
//! the emitter.

use crate::layout::columns::plan_columns;
use crate::layout::cursor::{Paginator, TableState};
use crate::layout::row::{header_ops, row_ops};
use crate::layout::{LayoutConfig, PT_TO_MM};
use crate::plan::{DrawOp, RenderPlan, ReportSummary, SectionSummary};
use crate::report::totals;
use crate::report::{CellValue, ReportRequest, ReportSection, Row};
use tracing::debug;

/// Compose a request into a paginated draw plan.
pub fn compose(request: &ReportRequest, cfg: &LayoutConfig) -> RenderPlan {
    debug!(
        title = %request.title,
        sections = request.sections.len(),
        "composing report"
    );

    let mut pager = Paginator::new(cfg);

    // Document title, centered at the top of page 1 only
    if !request.title.is_empty() {
        let x = cfg.centered_x(&request.title, cfg.title_size);
        text_line(&mut pager, cfg, x, &request.title, cfg.title_size, true);
    }
    if !request.date_range.is_empty() {
        let x = cfg.centered_x(&request.date_range, cfg.banner_size);
        text_line(&mut pager, cfg, x, &request.date_range, cfg.banner_size, false);
    }
    pager.gap(cfg.section_gap);

    let sections: Vec<SectionSummary> = request
        .sections
        .iter()
        .map(|section| compose_section(&mut pager, section, cfg))
        .collect();

    // One grand total line across all sections that declare a totals column
    let grand_total = totals::grand_total(&request.sections);
    if request.sections.iter().any(|s| s.totals_column.is_some()) {
        let content = format!("Grand Total: {}", CellValue::Number(grand_total));
        let x = cfg.page_width - cfg.margin - cfg.text_width(&content, cfg.section_size);
        text_line(&mut pager, cfg, x, &content, cfg.section_size, true);
    }

    let pages = pager.into_pages();
    debug!(pages = pages.len(), "report composed");

    RenderPlan {
        title: request.title.clone(),
        pages,
        summary: ReportSummary {
            sections,
            grand_total,
        },
    }
}

/// One standalone text line at the cursor, breaking the page first if it
/// would not fit.
fn text_line(
    pager: &mut Paginator,
    cfg: &LayoutConfig,
    x: f32,
    content: &str,
    size: f32,
    bold: bool,
) {
    let h = cfg.line_height(size);
    pager.ensure(h);
    let y = pager.cursor().y + size * PT_TO_MM;
    pager.ops().push(DrawOp::Text {
        x,
        y,
        size,
        bold,
        content: content.to_string(),
    });
    pager.advance(h);
}

fn compose_section(
    pager: &mut Paginator,
    section: &ReportSection,
    cfg: &LayoutConfig,
) -> SectionSummary {
    let layout = plan_columns(&section.columns, cfg);
    let subtotal = totals::section_subtotal(section);
    let table_follows = !layout.is_empty() && !section.rows.is_empty();

    // Keep the section name attached to at least the header and one row
    let name_h = cfg.line_height(cfg.section_size);
    let need = if table_follows {
        name_h + 2.0 * cfg.row_height
    } else {
        name_h
    };
    pager.ensure(need);
    if !section.name.is_empty() {
        text_line(pager, cfg, cfg.margin, &section.name, cfg.section_size, true);
    }

    if !table_follows {
        // A section with no rows (or no columns) renders its title only
        pager.gap(cfg.section_gap);
        return SectionSummary {
            name: section.name.clone(),
            rows_rendered: 0,
            rows_omitted: 0,
            truncated_columns: layout.truncated,
            subtotal,
        };
    }

    let rendered = section.rows.len().min(cfg.row_cap);
    let omitted = section.rows.len() - rendered;
    if omitted > 0 {
        debug!(section = %section.name, omitted, "row cap applied");
    }

    // Capped data rows, then the synthetic total row (which covers even
    // the capped-off rows)
    let total = totals::total_row(section);
    let display: Vec<(&Row, bool)> = section.rows[..rendered]
        .iter()
        .map(|row| (row, false))
        .chain(total.iter().map(|row| (row, true)))
        .collect();

    let mut state = TableState::HeaderPending;
    let mut next = 0usize;
    // Rows placed since the last header; a page only counts as full once
    // it holds at least one, so the machine always progresses even when a
    // config makes a single row taller than a page.
    let mut placed = 0usize;
    while state != TableState::Done {
        match state {
            TableState::HeaderPending => {
                // Header plus at least one row, so no page ends on a bare header
                pager.ensure(2.0 * cfg.row_height);
                let ops = header_ops(&layout, pager.cursor(), cfg);
                pager.ops().extend(ops);
                pager.advance(cfg.row_height);
                placed = 0;
                state = TableState::RenderingRows;
            }
            TableState::RenderingRows => {
                if next >= display.len() {
                    state = TableState::Done;
                } else if !pager.fits(cfg.row_height) && placed > 0 {
                    state = TableState::PageFull;
                } else {
                    let (row, emphasis) = display[next];
                    let ops = row_ops(row, &layout, pager.cursor(), next, emphasis, cfg);
                    pager.ops().extend(ops);
                    pager.advance(cfg.row_height);
                    placed += 1;
                    next += 1;
                }
            }
            TableState::PageFull => {
                pager.break_page();
                state = TableState::HeaderPending;
            }
            TableState::Done => unreachable!(),
        }
    }

    pager.gap(cfg.section_gap);
    SectionSummary {
        name: section.name.clone(),
        rows_rendered: rendered,
        rows_omitted: omitted,
        truncated_columns: layout.truncated,
        subtotal,
    }
}
