//! Forensic and compliance audit library for CTL certificates.
//!
//! A CTL ("Certificado de Tradición y Libertad") is the Colombian
//! property-registry certificate. This library audits a certificate PDF on
//! three independent axes and folds the results into two 0-100 risk scores:
//!
//! - **Page forensics**: every authentic page prints a PIN whose leading
//!   digits encode the print date as `yymmdd`; a mismatch means tampering.
//! - **Metadata forensics**: producer/creator strings naming word processors
//!   or consumer PDF editors mean the file was re-saved by an editing tool.
//! - **Risk extraction**: a generative model pulls the legal history, the
//!   SARLAFT history and every person on the certificate into a typed JSON
//!   payload.
//!
//! # Architecture
//!
//! - [`domain`]: PIN/date matchers and the typed model payload
//! - [`forensic`]: page scanner and metadata inspector
//! - [`extraction`]: generative client, prompt builder, payload parser
//! - [`scoring`]: pure score calculator with an injected clock
//! - [`report`]: xlsx workbook serialization
//! - [`error`]: comprehensive error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::Local;
//! use ctl_auditor::{
//!     build_workbook, calculate_scores, GeminiClient, MetadataInspector, PageScanner,
//!     RiskExtractor, DEFAULT_MODEL,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("certificado.pdf")?;
//!
//! let forensic = PageScanner::new().scan(&bytes);
//! let metadata = MetadataInspector::new().inspect(&bytes);
//!
//! let extractor = RiskExtractor::new(Box::new(GeminiClient::new("api-key", DEFAULT_MODEL)));
//! let extraction = extractor.extract(&bytes)?;
//!
//! let today = Local::now().date_naive();
//! let scores = calculate_scores(&extraction, &forensic, &metadata, today);
//! let workbook = build_workbook(&extraction, &scores, &forensic.log, today)?;
//! std::fs::write("Reporte_Credifamilia_360.xlsx", workbook)?;
//! # Ok(())
//! # }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod extraction;
pub mod forensic;
pub mod report;
pub mod scoring;

// Re-exports for convenient access
pub use domain::{
    dedup_persons, Finding, PersonRecord, PinMatcher, PrintDate, PrintDateMatcher, RiskExtraction,
};
pub use error::{AuditError, AuditResult};
pub use extraction::{
    build_prompt, document_text, parse_model_payload, GeminiClient, GenerativeClient,
    RiskExtractor, DEFAULT_MODEL, MAX_DOCUMENT_CHARS,
};
pub use forensic::{
    ForensicReport, MetadataInspector, MetadataOutcome, MetadataReport, PageScanner,
};
pub use report::{build_workbook, REPORT_FILENAME};
pub use scoring::{calculate_scores, document_age_days, ScoreResult, Scores};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let _scanner = PageScanner::new();
        let _inspector = MetadataInspector::new();
    }

    #[test]
    fn test_matchers_on_worked_example() {
        let text = "Pin No: 240610123\nImpreso el 10 de Junio de 2024";
        let pin = PinMatcher::new().find(text).unwrap();
        let date = PrintDateMatcher::new().find(text).unwrap();
        assert!(pin.starts_with(&date.expected_pin_prefix()));
    }
}
