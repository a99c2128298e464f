//! Repair-parsing of the model's reply.
//!
//! Model replies routinely wrap the JSON object in Markdown fences or
//! surround it with prose. The parser strips fences, slices from the first
//! `{` to the last `}`, and only then hands the text to serde.

use crate::domain::RiskExtraction;
use crate::error::{AuditError, AuditResult};

/// Parses a raw model reply into a [`RiskExtraction`].
///
/// Failure here is the single abort point of an audit run; the error carries
/// the serde message plus a preview of the offending reply.
pub fn parse_model_payload(raw: &str) -> AuditResult<RiskExtraction> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let candidate = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if end > start => &cleaned[start..=end],
        _ => cleaned,
    };

    serde_json::from_str(candidate).map_err(|e| AuditError::PayloadParse {
        reason: format!("{} (reply starts with: {:?})", e, preview(cleaned)),
    })
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(80) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
