//! # Layout Engine
//!
//! Fixed-grid table layout: column planning, page/overflow management and
//! row rendering. Everything is driven by an explicit [`LayoutConfig`]
//! passed into each call — there is no module-level formatting state, and
//! two concurrent render passes never share anything.

pub mod columns;
pub mod cursor;
pub mod row;

use serde::{Deserialize, Serialize};

/// Points to millimeters (font sizes are in points, page geometry in mm).
pub const PT_TO_MM: f32 = 0.352_778;

/// Page geometry, type sizes, fills and the layout caps.
///
/// The defaults describe an A4 portrait page. Column count and row count
/// caps are explicit here rather than buried in the layout code, and the
/// composition summary reports when either one drops data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Page width in mm.
    pub page_width: f32,
    /// Page height in mm.
    pub page_height: f32,
    /// Left/right margin in mm.
    pub margin: f32,
    /// Top margin: where the write cursor starts on every page.
    pub top_margin: f32,
    /// Bottom margin: rows never cross `page_height - bottom_margin`.
    pub bottom_margin: f32,
    /// Fixed table row height in mm.
    pub row_height: f32,
    /// Document title size in points.
    pub title_size: f32,
    /// Date-range banner size in points.
    pub banner_size: f32,
    /// Section name size in points.
    pub section_size: f32,
    /// Cell and column-header text size in points.
    pub body_size: f32,
    /// Horizontal inset between a cell border and its text, in mm.
    pub cell_inset: f32,
    /// Vertical gap between sections, in mm.
    pub section_gap: f32,
    /// Cell border stroke width in mm.
    pub border_width: f32,
    /// Rendered-column cap. Columns beyond this are never drawn.
    pub max_columns: usize,
    /// Per-section data-row cap. Rows beyond this are never drawn
    /// (subtotals still cover them).
    pub row_cap: usize,
    /// Average glyph advance as a fraction of the type size. Used for
    /// width estimation and truncation; treated as a constant of the
    /// face (Helvetica averages just under half an em).
    pub glyph_aspect: f32,
    /// Column header background, RGB in 0..=1.
    pub header_fill: [f32; 3],
    /// Alternating row tint, RGB in 0..=1.
    pub band_fill: [f32; 3],
    /// Cell border color, RGB in 0..=1.
    pub border_color: [f32; 3],
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 14.0,
            top_margin: 16.0,
            bottom_margin: 16.0,
            row_height: 8.0,
            title_size: 16.0,
            banner_size: 10.0,
            section_size: 12.0,
            body_size: 9.0,
            cell_inset: 1.5,
            section_gap: 6.0,
            border_width: 0.2,
            max_columns: 5,
            row_cap: 100,
            glyph_aspect: 0.48,
            header_fill: [0.85, 0.85, 0.85],
            band_fill: [0.93, 0.93, 0.95],
            border_color: [0.30, 0.30, 0.30],
        }
    }
}

impl LayoutConfig {
    /// Usable width between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Lowest y a row may end at (top-down coordinates).
    pub fn limit_y(&self) -> f32 {
        self.page_height - self.bottom_margin
    }

    /// Vertical advance for a standalone text line of the given size.
    pub fn line_height(&self, size: f32) -> f32 {
        size * PT_TO_MM * 1.45
    }

    /// Estimated width of a text run, in mm.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * PT_TO_MM * self.glyph_aspect
    }

    /// Cut (never wrap) a text run so it fits `max_width`.
    pub fn fit_text(&self, text: &str, max_width: f32, size: f32) -> String {
        if self.text_width(text, size) <= max_width {
            return text.to_string();
        }
        let per_char = size * PT_TO_MM * self.glyph_aspect;
        let keep = (max_width / per_char).floor().max(0.0) as usize;
        text.chars().take(keep).collect()
    }

    /// x origin that centers a text run on the page.
    pub fn centered_x(&self, text: &str, size: f32) -> f32 {
        ((self.page_width - self.text_width(text, size)) / 2.0).max(self.margin)
    }

    /// Baseline offset from a box top that vertically centers text of the
    /// given size (cap height approximated at 0.7 em).
    pub fn baseline_in_box(&self, box_height: f32, size: f32) -> f32 {
        (box_height + size * PT_TO_MM * 0.7) / 2.0
    }
}
