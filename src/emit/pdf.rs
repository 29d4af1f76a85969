//! # PDF Backend
//!
//! Translates a draw plan into PDF pages. The plan's coordinates are
//! top-down millimeters; PDF's y axis points up, so every op is flipped
//! here. Text uses the built-in Helvetica faces, so the output has no
//! embedded font payload.
//!
//! Any failure of the underlying writer surfaces as
//! [`ReportError::Render`]; no partial document is ever returned.

use crate::emit::RenderedDocument;
use crate::error::ReportError;
use crate::layout::LayoutConfig;
use crate::plan::{DrawOp, PageOps, RenderPlan, Shade};
use printpdf::path::PaintMode;
use printpdf::*;
use tracing::debug;

const MM_TO_PT: f32 = 2.834_646;

/// Serialize a composed plan into PDF bytes.
pub fn render_pdf(plan: &RenderPlan, cfg: &LayoutConfig) -> Result<RenderedDocument, ReportError> {
    let title = if plan.title.is_empty() {
        "Report"
    } else {
        plan.title.as_str()
    };

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(cfg.page_width),
        Mm(cfg.page_height),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Render(e.to_string()))?;

    let mut page_refs = vec![(first_page, first_layer)];
    for _ in 1..plan.pages.len() {
        page_refs.push(doc.add_page(Mm(cfg.page_width), Mm(cfg.page_height), "Layer 1"));
    }

    for (ops, (page_index, layer_index)) in plan.pages.iter().zip(&page_refs) {
        let layer = doc.get_page(*page_index).get_layer(*layer_index);
        draw_page(&layer, ops, cfg, &regular, &bold);
    }

    let page_count = plan.pages.len();
    let bytes = doc
        .save_to_bytes()
        .map_err(|e| ReportError::Render(e.to_string()))?;
    debug!(pages = page_count, bytes = bytes.len(), "pdf emitted");

    Ok(RenderedDocument::new(bytes, page_count))
}

fn draw_page(
    layer: &PdfLayerReference,
    ops: &PageOps,
    cfg: &LayoutConfig,
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    layer.set_outline_color(rgb(cfg.border_color));
    layer.set_outline_thickness((cfg.border_width * MM_TO_PT).into());

    // Text paints with the fill color too, so track what the fill is set
    // to and only switch when an op needs something else. None = black.
    let mut fill: Option<Shade> = None;

    for op in ops {
        match op {
            DrawOp::Fill { x, y, w, h, shade } => {
                if fill != Some(*shade) {
                    let color = match shade {
                        Shade::Header => cfg.header_fill,
                        Shade::Band => cfg.band_fill,
                    };
                    layer.set_fill_color(rgb(color));
                    fill = Some(*shade);
                }
                layer.add_rect(rect(*x, *y, *w, *h, cfg).with_mode(PaintMode::Fill));
            }
            DrawOp::Rect { x, y, w, h } => {
                layer.add_rect(rect(*x, *y, *w, *h, cfg).with_mode(PaintMode::Stroke));
            }
            DrawOp::Text {
                x,
                y,
                size,
                bold: emphasized,
                content,
            } => {
                if fill.is_some() {
                    layer.set_fill_color(rgb([0.0, 0.0, 0.0]));
                    fill = None;
                }
                let font = if *emphasized { bold } else { regular };
                layer.use_text(
                    content.clone(),
                    *size,
                    Mm(*x),
                    Mm(cfg.page_height - y),
                    font,
                );
            }
        }
    }
}

fn rgb(c: [f32; 3]) -> Color {
    Color::Rgb(Rgb::new(c[0].into(), c[1].into(), c[2].into(), None))
}

/// Flip a top-down rectangle into PDF's bottom-up coordinates.
fn rect(x: f32, y: f32, w: f32, h: f32, cfg: &LayoutConfig) -> Rect {
    Rect::new(
        Mm(x),
        Mm(cfg.page_height - (y + h)),
        Mm(x + w),
        Mm(cfg.page_height - y),
    )
}
