//! # Error Types
//!
//! This module defines error types used throughout the planilla library.

use thiserror::Error;

/// Main error type for planilla operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// A source record could not be normalized, even with placeholder values
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// The drawing/serialization backend failed
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
