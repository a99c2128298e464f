//! Risk extraction via a generative collaborator.
//!
//! This module ties the pieces together: whole-document text extraction,
//! prompt construction, the single model invocation, and repair-parsing of
//! the reply into a typed payload.

pub mod client;
pub mod parse;
pub mod prompt;

pub use client::{GeminiClient, GenerativeClient, DEFAULT_MODEL};
pub use parse::parse_model_payload;
pub use prompt::{build_prompt, MAX_DOCUMENT_CHARS};

use crate::domain::RiskExtraction;
use crate::error::{AuditError, AuditResult};

/// Extracts the whole document's text in one pass.
///
/// Independent of the forensic scanner's per-page reads; both consumers
/// parse the byte buffer from scratch.
pub fn document_text(bytes: &[u8]) -> AuditResult<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AuditError::TextExtraction {
        reason: e.to_string(),
    })
}

/// High-level extraction service over an injected generative client.
pub struct RiskExtractor {
    client: Box<dyn GenerativeClient>,
}

impl RiskExtractor {
    /// Creates an extractor around the given client.
    pub fn new(client: Box<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Runs the full extraction over raw PDF bytes: text, prompt, one model
    /// call, repair-parse.
    pub fn extract(&self, bytes: &[u8]) -> AuditResult<RiskExtraction> {
        let text = document_text(bytes)?;
        let prompt = build_prompt(&text);
        let reply = self.client.generate(&prompt)?;
        parse_model_payload(&reply)
    }
}
