//! Error types for the CTL audit library.
//!
//! This module provides a comprehensive error handling strategy with proper
//! error categorization and context preservation.

use std::fmt;

/// Result type alias for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

/// Comprehensive error type for all audit operations.
///
/// This enum categorizes errors by their source and provides rich context
/// for debugging and error recovery. The forensic scanner and the metadata
/// inspector never surface these errors: they degrade in place. The
/// extraction client is the only component whose failure aborts a run.
#[derive(Debug)]
pub enum AuditError {
    /// Error occurred during PDF processing
    PdfProcessing {
        message: String,
        page: Option<usize>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Text extraction failed
    TextExtraction { reason: String },

    /// The generative collaborator could not be invoked
    Generation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The collaborator's reply did not contain a parseable JSON payload
    PayloadParse { reason: String },

    /// Required credential is missing
    MissingCredential { name: String },

    /// Spreadsheet serialization failed
    Spreadsheet { message: String },
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PdfProcessing { message, page, .. } => {
                if let Some(p) = page {
                    write!(f, "PDF processing error on page {}: {}", p, message)
                } else {
                    write!(f, "PDF processing error: {}", message)
                }
            }
            Self::TextExtraction { reason } => {
                write!(f, "Text extraction failed: {}", reason)
            }
            Self::Generation { message, .. } => {
                write!(f, "Generative client error: {}", message)
            }
            Self::PayloadParse { reason } => {
                write!(f, "Model reply is not parseable JSON: {}", reason)
            }
            Self::MissingCredential { name } => {
                write!(f, "Missing credential: {}", name)
            }
            Self::Spreadsheet { message } => {
                write!(f, "Spreadsheet error: {}", message)
            }
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PdfProcessing { source, .. } | Self::Generation { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// Conversion implementations for common error types

impl From<reqwest::Error> for AuditError {
    fn from(err: reqwest::Error) -> Self {
        Self::Generation {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lopdf::Error> for AuditError {
    fn from(err: lopdf::Error) -> Self {
        Self::PdfProcessing {
            message: err.to_string(),
            page: None,
            source: Some(Box::new(err)),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for AuditError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet {
            message: err.to_string(),
        }
    }
}
