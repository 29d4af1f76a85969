//! # Text Preview
//!
//! Renders a draw plan as plain text, one line per text op plus a cell
//! tally per page. Useful for eyeballing layout in tests and logs without
//! opening a PDF viewer.

use crate::plan::{DrawOp, RenderPlan};
use std::fmt::Write;

/// Render the plan as a human-readable page-by-page listing.
pub fn render_text(plan: &RenderPlan) -> String {
    let mut out = String::new();
    for (index, page) in plan.pages.iter().enumerate() {
        let _ = writeln!(out, "── page {} ──", index + 1);
        let mut cells = 0usize;
        let mut tinted = 0usize;
        for op in page {
            match op {
                DrawOp::Text {
                    x,
                    y,
                    bold,
                    content,
                    ..
                } => {
                    let marker = if *bold { "*" } else { " " };
                    let _ = writeln!(out, "[{:6.1},{:6.1}]{} {}", x, y, marker, content);
                }
                DrawOp::Rect { .. } => cells += 1,
                DrawOp::Fill { .. } => tinted += 1,
            }
        }
        let _ = writeln!(out, "({} cells, {} fills)", cells, tinted);
    }
    out
}
