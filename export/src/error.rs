//! Export error type.
//!
//! Only fatal conditions live here. Degraded inputs (malformed stored prefix
//! JSON, unknown datatype names) are handled in place and never reach the
//! caller as errors.

use thiserror::Error;

use crate::ExportFormat;

/// Errors raised by the export pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The snapshot cannot be exported as given: missing or non-absolute
    /// namespace, empty format selector, dangling concept or individual
    /// reference, or a malformed IRI override.
    #[error("invalid ontology snapshot: {0}")]
    InvalidOntologySnapshot(String),

    /// The requested format name is not one of the four supported formats.
    #[error("unsupported export format: {0:?}")]
    UnsupportedFormat(String),

    /// A writer could not express part of the triple model in its grammar.
    #[error("cannot serialize as {format}: {reason}")]
    Unserializable {
        /// Format whose writer failed.
        format: ExportFormat,
        /// What could not be written.
        reason: String,
    },
}

impl ExportError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ExportError::InvalidOntologySnapshot(reason.into())
    }
}

/// Result alias for the export pipeline.
pub type Result<T> = std::result::Result<T, ExportError>;
