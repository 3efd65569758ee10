//! Error types for export operations.

use thiserror::Error;

use datagrid_model::BoxError;

/// Errors that abort an export.
///
/// Every failure aborts the whole export; no partial document reaches the
/// transport, and the table's row cursor is restored regardless.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No naming source yielded a usable element name for a column.
    #[error("no suitable tag found for column at index {index}")]
    NoTagAvailable { index: usize },

    /// Forward-declared entry point with no implementation.
    #[error("{operation} export is not supported")]
    Unsupported { operation: &'static str },

    /// Unknown output charset name.
    #[error("unsupported encoding: {name}")]
    UnsupportedEncoding { name: String },

    /// The transport collaborator failed to deliver the document.
    #[error("transport write failed: {0}")]
    TransportWrite(#[source] std::io::Error),

    /// A caller-supplied cell extractor failed.
    #[error("cell extractor failed for column at index {index}: {source}")]
    ExtractorFailed {
        index: usize,
        #[source]
        source: BoxError,
    },
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Create a NoTagAvailable error.
    pub fn no_tag(index: usize) -> Self {
        Self::NoTagAvailable { index }
    }

    /// Create an Unsupported error.
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Create an UnsupportedEncoding error.
    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding { name: name.into() }
    }

    /// Create an ExtractorFailed error.
    pub fn extractor_failed(index: usize, source: BoxError) -> Self {
        Self::ExtractorFailed { index, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExportError::no_tag(2);
        assert_eq!(format!("{err}"), "no suitable tag found for column at index 2");

        let err = ExportError::unsupported("multi-table");
        assert_eq!(format!("{err}"), "multi-table export is not supported");

        let err = ExportError::unsupported_encoding("utf-7");
        assert_eq!(format!("{err}"), "unsupported encoding: utf-7");
    }

    #[test]
    fn test_extractor_failure_carries_source() {
        let source: BoxError = "boom".into();
        let err = ExportError::extractor_failed(1, source);
        let message = format!("{err}");
        assert!(message.contains("column at index 1"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn test_transport_write_wraps_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = ExportError::TransportWrite(io_err);
        assert!(format!("{err}").contains("closed"));
    }
}
