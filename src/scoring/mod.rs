//! Risk score calculation.
//!
//! A pure mapping from the three analysis outputs to two 0-100 scores with
//! ordered reason lists. "Today" is an argument, not the wall clock, so the
//! expiry rule stays deterministic under test.

use chrono::NaiveDate;

use crate::domain::RiskExtraction;
use crate::forensic::{ForensicReport, MetadataReport};

/// A clamped 0-100 score with its ordered justification lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: i32,
    pub reasons: Vec<String>,
}

/// Legal and compliance scores for one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores {
    pub legal: ScoreResult,
    pub compliance: ScoreResult,
}

/// Days elapsed between a `DD-MM-YYYY` document date and `today`.
///
/// Returns `None` on a malformed date so callers (and tests) can tell a
/// parse failure from an absent date; the scoring rule skips both silently.
pub fn document_age_days(date: &str, today: NaiveDate) -> Option<i64> {
    let parsed = NaiveDate::parse_from_str(date, "%d-%m-%Y").ok()?;
    Some((today - parsed).num_days())
}

/// Computes both risk scores.
///
/// Pure: identical inputs always yield identical scores and identically
/// ordered reasons.
pub fn calculate_scores(
    extraction: &RiskExtraction,
    forensic: &ForensicReport,
    metadata: &MetadataReport,
    today: NaiveDate,
) -> Scores {
    let mut legal: i32 = 100;
    let mut legal_reasons = Vec::new();
    let mut compliance: i32 = 100;
    let mut compliance_reasons = Vec::new();

    // Forensic verdict dominates everything: a tampered document scores 0 on
    // both axes. The remaining rules still run; the clamp keeps the zero.
    if forensic.adulterated || metadata.adulterated {
        legal = 0;
        compliance = 0;
        legal_reasons.push("DOCUMENTO ADULTERADO".to_string());
        compliance_reasons.push("FRAUDE DOCUMENTAL".to_string());
    }

    let active = extraction.active_legal();
    let embargos = active
        .iter()
        .filter(|f| f.concept_contains("EMBARGO"))
        .count();
    let gravamenes = active
        .iter()
        .filter(|f| f.concept_contains("HIPOTECA") || f.concept_contains("GRAVAMEN"))
        .count();
    let limitaciones = active
        .iter()
        .filter(|f| {
            ["PATRIMONIO", "AFECTACION", "USUFRUCTO"]
                .iter()
                .any(|k| f.concept_contains(k))
        })
        .count();

    // An embargo suppresses the lien penalty even when both are present.
    if embargos > 0 {
        legal -= 50;
        legal_reasons.push(format!("{} Embargos Vigentes", embargos));
    } else if gravamenes > 0 {
        legal -= 20;
        legal_reasons.push(format!("{} Hipotecas/Gravamenes Vigentes", gravamenes));
    }

    if limitaciones > 0 {
        legal -= 20;
        legal_reasons.push(format!("{} Limitaciones Vigentes", limitaciones));
    }

    if extraction.false_chain() {
        legal -= 30;
        legal_reasons.push("Falsa Tradicion".to_string());
    }

    let active_sarlaft = extraction.active_compliance();
    if !active_sarlaft.is_empty() {
        // Hard override, not a decrement
        compliance = 0;
        compliance_reasons.push(format!(
            "ALERTA LISTAS: {} Hallazgos Activos",
            active_sarlaft.len()
        ));
    }

    if extraction.flip_alert() {
        compliance -= 30;
        compliance_reasons.push("Alerta Flip".to_string());
    }

    if let Some(date) = &forensic.document_date {
        if let Some(days) = document_age_days(date, today) {
            if days > 30 {
                compliance -= 20;
                compliance_reasons.push(format!("Vencido ({} dias)", days));
            }
        }
    }

    Scores {
        legal: ScoreResult {
            score: legal.clamp(0, 100),
            reasons: legal_reasons,
        },
        compliance: ScoreResult {
            score: compliance.clamp(0, 100),
            reasons: compliance_reasons,
        },
    }
}
