//! # Planilla - Paginated Tabular Report Compositor
//!
//! Planilla turns one or more heterogeneous row datasets (sales, damages,
//! returns, bottle-stock movements, income/expense entries) into a single
//! multi-page printable PDF: repeated column headers, fixed-grid cells,
//! truncated text, alternating row shading, per-section subtotals and a
//! grand total.
//!
//! It is a pure in-process transform: rows arrive already fetched and
//! joined by the surrounding application, and the finished document is
//! handed back as bytes for a download collaborator to persist. Planilla
//! itself performs no network or disk access.
//!
//! ## Quick Start
//!
//! ```no_run
//! use planilla::{
//!     ColumnSpec, LayoutConfig, ReportRequest, ReportSection, Row,
//!     compose, render_pdf,
//! };
//!
//! let request = ReportRequest {
//!     title: "Sales Report".into(),
//!     date_range: "2024-01-01 to 2024-01-31".into(),
//!     sections: vec![ReportSection {
//!         name: "Sales".into(),
//!         columns: vec![
//!             ColumnSpec::new("date", "Date"),
//!             ColumnSpec::new("product", "Product"),
//!             ColumnSpec::new("revenue", "Revenue"),
//!         ],
//!         rows: vec![
//!             Row::new()
//!                 .with("date", "2024-01-01")
//!                 .with("product", "A")
//!                 .with("revenue", 100),
//!         ],
//!         totals_column: Some("revenue".into()),
//!     }],
//! };
//!
//! let cfg = LayoutConfig::default();
//! let plan = compose(&request, &cfg);
//! let doc = render_pdf(&plan, &cfg)?;
//! std::fs::write("sales-2024-01-31.pdf", doc.bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ReportRequest → compose (layout) → RenderPlan (inspectable ops) → emit → bytes
//! ```
//!
//! The draw plan in the middle is a plain op stream — pagination, column
//! widths, truncation and shading are all resolved there, so layout can be
//! tested without parsing PDF output.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`report`] | Request model, row normalizer, totals aggregator |
//! | [`layout`] | Layout config, column planner, paginator, row renderer |
//! | [`compose`] | Section composer: request → draw plan |
//! | [`plan`] | Draw-op intermediate representation |
//! | [`emit`] | PDF backend, text preview, filename convention |
//! | [`error`] | Error types |

pub mod compose;
pub mod emit;
pub mod error;
pub mod layout;
pub mod plan;
pub mod report;

// Re-exports for convenience
pub use compose::compose;
pub use emit::{RenderedDocument, render_pdf, suggested_filename};
pub use error::ReportError;
pub use layout::LayoutConfig;
pub use plan::{DrawOp, RenderPlan};
pub use report::{CellValue, ColumnSpec, ReportRequest, ReportSection, Row};
