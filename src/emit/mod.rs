//! # Document Emitter
//!
//! Finalizes a composed [`RenderPlan`](crate::plan::RenderPlan) into an
//! opaque [`RenderedDocument`]. The emitter performs no I/O — persisting
//! or downloading the artifact is the caller's job; [`suggested_filename`]
//! provides the conventional `<subject>-<ISO-date>.pdf` name for it.
//!
//! Backends:
//! - [`pdf`] — the real output, via printpdf built-in Helvetica fonts
//! - [`preview`] — a plain-text rendition of the plan for debugging

pub mod pdf;
pub mod preview;

pub use pdf::render_pdf;

use chrono::NaiveDate;

/// The finished artifact: serialized document bytes plus the page count.
///
/// Owned exclusively by the emitter until handed to the caller; immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    page_count: usize,
}

impl RenderedDocument {
    pub(crate) fn new(bytes: Vec<u8>, page_count: usize) -> Self {
        Self { bytes, page_count }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The download filename convention: `<subject>-<ISO-date>.pdf`, subject
/// lowercased with whitespace collapsed to dashes.
pub fn suggested_filename(subject: &str, date: NaiveDate) -> String {
    let slug: String = subject
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{}.pdf", slug, date.format("%Y-%m-%d"))
}
