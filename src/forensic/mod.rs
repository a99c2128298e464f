//! Forensic inspection of certificate bytes.
//!
//! Two independent checks run over the raw PDF: a page-by-page PIN-vs-date
//! scan ([`scanner`]) and a producer/creator metadata denylist check
//! ([`metadata`]). Both are best-effort by contract: they always return a
//! report, degraded when the bytes cannot be read.

pub mod metadata;
pub mod scanner;

pub use metadata::MetadataInspector;
pub use scanner::PageScanner;

/// Outcome of the page-by-page PIN scan.
///
/// Built once per run and immutable afterwards; the orchestrator owns it.
#[derive(Debug, Clone, Default)]
pub struct ForensicReport {
    /// True when at least one page failed the PIN-vs-date rule
    pub adulterated: bool,

    /// 1-based numbers of the failing pages, in document order
    pub affected_pages: Vec<u32>,

    /// Per-page audit trail, in document order
    pub log: Vec<String>,

    /// Print date of the first page carrying one, as `DD-MM-YYYY`
    pub document_date: Option<String>,
}

/// How the metadata report was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetadataOutcome {
    /// Producer/creator fields were read from the document
    Read,

    /// The document or its info dictionary could not be read; the report
    /// carries the non-adulterated defaults
    #[default]
    Defaulted,
}

/// Outcome of the metadata denylist check.
#[derive(Debug, Clone)]
pub struct MetadataReport {
    /// True when a known editing tool left its signature
    pub adulterated: bool,

    /// Lower-cased producer + creator strings, or "Desconocido"
    pub software: String,

    /// Whether the fields were actually read or defaulted on failure
    pub outcome: MetadataOutcome,
}

impl Default for MetadataReport {
    fn default() -> Self {
        Self {
            adulterated: false,
            software: "Desconocido".to_string(),
            outcome: MetadataOutcome::Defaulted,
        }
    }
}
