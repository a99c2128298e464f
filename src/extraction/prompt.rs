//! Prompt construction for the extraction call.
//!
//! One prompt carries everything: the auditor role framing, the two domain
//! keyword lists, the four extraction missions with a literal JSON schema
//! example, and the document text capped at [`MAX_DOCUMENT_CHARS`].

/// Hard cap on submitted document text. Content past this point is invisible
/// to the extraction, a known limitation inherited from the request-size
/// bound.
pub const MAX_DOCUMENT_CHARS: usize = 30_000;

/// Legal-risk trigger phrases the model is told to look for.
const REGLAS_JURIDICAS: &str = "\
    - PATRIMONIO DE FAMILIA / AFECTACION A VIVIENDA FAMILIAR\n\
    - USUFRUCTO / USO Y HABITACION / SERVIDUMBRE\n\
    - HIPOTECA / EMBARGO / CONDICION RESOLUTORIA";

/// SARLAFT/AML trigger phrases the model is told to look for.
const REGLAS_SARLAFT: &str = "\
    - ADJUDICACION POR EXPROPIACION / EXPROPIACION\n\
    - EXTINCION DEL DERECHO DE DOMINIO / RESTITUCION\n\
    - LAVADO DE ACTIVOS / TESTAFERRATO / ENRIQUECIMIENTO ILICITO\n\
    - TOMA DE POSESION / MEDIDA CAUTELAR / SANEAMIENTO FALSA TRADICION";

/// Builds the single extraction prompt for a document's text.
pub fn build_prompt(document_text: &str) -> String {
    format!(
        r#"Eres un Auditor Forense Inmobiliario.

MISION 1: EXTRACCION DETALLADA DE PERSONAS (MODO BASE DE DATOS)
Extrae TODAS las personas naturales y juridicas. Desglosa los datos EXACTAMENTE en estas columnas:
- "Tipo_Documento": CC, NIT, TI, CE o "No Registra".
- "Numero_Documento": Solo el numero (sin puntos, sin digito de verificacion si es NIT).
- "Nombre": Nombre completo o Razon Social (Limpio).
- "Rol": Propietario, Banco, Acreedor, Juez, Demandante.
- "Ubicacion": Seccion del documento (Anotaciones, Complementacion, Salvedades).
- "Anotacion": Numero de la anotacion (Ej: "5"). Si es Complementacion pon "N/A".

MISION 2: HISTORIAL JURIDICO DETALLADO (Reglas:
{reglas_juridicas})
Extrae un LISTADO de cada hallazgo juridico encontrado, indicando:
- "Concepto": Ej: Hipoteca, Embargo, Patrimonio de Familia.
- "Estado": "VIGENTE" (o ABIERTA) si esta activo, "CANCELADO" (o CERRADA) si ya se levanto.
- "Anotacion": Numero de la anotacion donde se constituyo.
- "Detalle": Breve descripcion (Ej: "A favor de Davivienda").

MISION 3: HISTORIAL SARLAFT DETALLADO (Reglas:
{reglas_sarlaft})
Extrae un LISTADO de cada hallazgo SARLAFT, indicando Concepto, Estado, Anotacion y Detalle.

MISION 4: FLIP (< 12 meses) y Falsa Tradicion.

JSON RESPUESTA:
{{
  "municipio": "Ciudad",
  "historial_juridico": [
      {{ "Concepto": "Hipoteca", "Estado": "VIGENTE", "Anotacion": "10", "Detalle": "Hipoteca Abierta a favor de Banco X" }}
  ],
  "historial_sarlaft": [
      {{ "Concepto": "Extincion Dominio", "Estado": "CANCELADO", "Anotacion": "3", "Detalle": "Medida levantada" }}
  ],
  "alerta_flip": "SI/NO",
  "falsa_tradicion": "SI/NO",
  "personas_completo": [
      {{ "Tipo_Documento": "CC", "Numero_Documento": "123", "Nombre": "JUAN", "Rol": "Prop", "Ubicacion": "Anot", "Anotacion": "1" }}
  ]
}}
TEXTO: {texto}"#,
        reglas_juridicas = REGLAS_JURIDICAS,
        reglas_sarlaft = REGLAS_SARLAFT,
        texto = truncate_chars(document_text, MAX_DOCUMENT_CHARS),
    )
}

/// Truncates to at most `max` characters without splitting a UTF-8 boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_schema_and_rules() {
        let prompt = build_prompt("ANOTACION 5: EMBARGO");
        assert!(prompt.contains("\"historial_juridico\""));
        assert!(prompt.contains("\"personas_completo\""));
        assert!(prompt.contains("HIPOTECA / EMBARGO"));
        assert!(prompt.contains("LAVADO DE ACTIVOS"));
        assert!(prompt.contains("TEXTO: ANOTACION 5: EMBARGO"));
    }

    #[test]
    fn test_truncation_is_char_boundary_safe() {
        // "ñ" is two bytes; a byte-indexed slice at 3 would panic
        let text = "ññññ";
        assert_eq!(truncate_chars(text, 3), "ñññ");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_document_text_is_capped() {
        let long = "a".repeat(MAX_DOCUMENT_CHARS + 500);
        let prompt = build_prompt(&long);
        let submitted = prompt.split("TEXTO: ").nth(1).unwrap();
        assert_eq!(submitted.chars().count(), MAX_DOCUMENT_CHARS);
    }
}
