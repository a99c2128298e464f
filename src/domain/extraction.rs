//! Typed model payload for the risk-extraction reply.
//!
//! The generative collaborator is asked for a single JSON object with Spanish
//! field names; these types mirror that contract. Every field is defaulted:
//! a list the model omits becomes empty rather than a parse error.

use serde::Deserialize;

/// Full extraction payload returned by the model.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskExtraction {
    #[serde(default)]
    pub municipio: String,

    #[serde(default)]
    pub historial_juridico: Vec<Finding>,

    #[serde(default)]
    pub historial_sarlaft: Vec<Finding>,

    /// "SI"/"NO" flip-sale flag (resale within 12 months of acquisition)
    #[serde(default)]
    pub alerta_flip: String,

    /// "SI"/"NO" false-chain-of-title flag
    #[serde(default)]
    pub falsa_tradicion: String,

    #[serde(default)]
    pub personas_completo: Vec<PersonRecord>,
}

impl RiskExtraction {
    /// Legal findings whose status marks them as still in force.
    pub fn active_legal(&self) -> Vec<&Finding> {
        self.historial_juridico
            .iter()
            .filter(|f| f.is_open())
            .collect()
    }

    /// SARLAFT findings whose status marks them as in force.
    ///
    /// Unlike the legal filter this only accepts "VIGENTE"; "ABIERTA" is a
    /// legal-register term and does not appear in SARLAFT statuses.
    pub fn active_compliance(&self) -> Vec<&Finding> {
        self.historial_sarlaft
            .iter()
            .filter(|f| f.is_vigente())
            .collect()
    }

    /// True when the model flagged a flip sale ("SI", case-insensitive).
    pub fn flip_alert(&self) -> bool {
        self.alerta_flip.to_uppercase().contains("SI")
    }

    /// True when the model flagged a false chain of title (exact "SI").
    pub fn false_chain(&self) -> bool {
        self.falsa_tradicion == "SI"
    }

    /// Persons deduplicated on (document number, name), first occurrence wins.
    pub fn unique_persons(&self) -> Vec<&PersonRecord> {
        dedup_persons(&self.personas_completo)
    }
}

/// One legal or SARLAFT register entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Finding {
    #[serde(rename = "Concepto", default)]
    pub concepto: String,

    /// Free text; "VIGENTE"/"ABIERTA" mean active, "CANCELADO"/"CERRADA" closed
    #[serde(rename = "Estado", default)]
    pub estado: String,

    #[serde(rename = "Anotacion", default)]
    pub anotacion: String,

    #[serde(rename = "Detalle", default)]
    pub detalle: String,
}

impl Finding {
    /// Active in the legal sense: status contains "VIGENTE" or "ABIERTA".
    pub fn is_open(&self) -> bool {
        let estado = self.estado.to_uppercase();
        estado.contains("VIGENTE") || estado.contains("ABIERTA")
    }

    /// Active in the SARLAFT sense: status contains "VIGENTE".
    pub fn is_vigente(&self) -> bool {
        self.estado.to_uppercase().contains("VIGENTE")
    }

    /// Case-insensitive substring test on the concept label.
    pub fn concept_contains(&self, keyword: &str) -> bool {
        self.concepto.to_uppercase().contains(keyword)
    }
}

/// One person (natural or juridical) extracted from the certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    /// CC, NIT, TI, CE or "No Registra"
    #[serde(rename = "Tipo_Documento", default)]
    pub tipo_documento: String,

    #[serde(rename = "Numero_Documento", default)]
    pub numero_documento: String,

    #[serde(rename = "Nombre", default)]
    pub nombre: String,

    #[serde(rename = "Rol", default)]
    pub rol: String,

    /// Document section the record came from (Anotaciones, Complementacion...)
    #[serde(rename = "Ubicacion", default)]
    pub ubicacion: String,

    #[serde(rename = "Anotacion", default)]
    pub anotacion: String,
}

/// Deduplicates person records on (document number, name), keeping the first
/// occurrence's remaining fields.
pub fn dedup_persons(persons: &[PersonRecord]) -> Vec<&PersonRecord> {
    let mut seen: Vec<(&str, &str)> = Vec::new();
    let mut unique = Vec::new();
    for person in persons {
        let key = (person.numero_documento.as_str(), person.nombre.as_str());
        if !seen.contains(&key) {
            seen.push(key);
            unique.push(person);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(concepto: &str, estado: &str) -> Finding {
        Finding {
            concepto: concepto.to_string(),
            estado: estado.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_predicates() {
        assert!(finding("Embargo", "VIGENTE").is_open());
        assert!(finding("Embargo", "Medida abierta").is_open());
        assert!(!finding("Embargo", "CANCELADO").is_open());

        assert!(finding("Extincion", "vigente").is_vigente());
        assert!(!finding("Extincion", "ABIERTA").is_vigente());
    }

    #[test]
    fn test_concept_keyword() {
        let f = finding("Hipoteca abierta de mayor cuantia", "VIGENTE");
        assert!(f.concept_contains("HIPOTECA"));
        assert!(!f.concept_contains("EMBARGO"));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let parsed: RiskExtraction =
            serde_json::from_str(r#"{"municipio": "Bogota"}"#).expect("payload should parse");
        assert_eq!(parsed.municipio, "Bogota");
        assert!(parsed.historial_juridico.is_empty());
        assert!(parsed.historial_sarlaft.is_empty());
        assert!(parsed.personas_completo.is_empty());
        assert!(!parsed.flip_alert());
        assert!(!parsed.false_chain());
    }

    #[test]
    fn test_person_dedup_first_wins() {
        let persons = vec![
            PersonRecord {
                tipo_documento: "CC".to_string(),
                numero_documento: "123".to_string(),
                nombre: "JUAN PEREZ".to_string(),
                rol: "Propietario".to_string(),
                ..Default::default()
            },
            PersonRecord {
                tipo_documento: "CC".to_string(),
                numero_documento: "123".to_string(),
                nombre: "JUAN PEREZ".to_string(),
                rol: "Demandante".to_string(),
                ..Default::default()
            },
            PersonRecord {
                numero_documento: "456".to_string(),
                nombre: "BANCO X".to_string(),
                ..Default::default()
            },
        ];
        let unique = dedup_persons(&persons);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].rol, "Propietario");
    }

    #[test]
    fn test_flip_flag_is_substring_insensitive() {
        let extraction = RiskExtraction {
            alerta_flip: "si, venta en 8 meses".to_string(),
            ..Default::default()
        };
        assert!(extraction.flip_alert());
    }

    #[test]
    fn test_false_chain_requires_exact_si() {
        let extraction = RiskExtraction {
            falsa_tradicion: "posible".to_string(),
            ..Default::default()
        };
        assert!(!extraction.false_chain());
    }
}
