//! Spreadsheet report serialization.
//!
//! Produces the multi-sheet xlsx export: a one-row dashboard, the
//! deduplicated persons base, the two finding histories (only when
//! non-empty) and the forensic log.

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

use crate::domain::{Finding, PersonRecord, RiskExtraction};
use crate::error::AuditResult;
use crate::scoring::Scores;

/// Fixed output filename for the exported report.
pub const REPORT_FILENAME: &str = "Reporte_Credifamilia_360.xlsx";

const PERSON_COLUMNS: [&str; 6] = [
    "Tipo_Documento",
    "Numero_Documento",
    "Nombre",
    "Rol",
    "Ubicacion",
    "Anotacion",
];

const FINDING_COLUMNS: [&str; 4] = ["Concepto", "Estado", "Anotacion", "Detalle"];

/// Serializes a full audit run into xlsx bytes.
pub fn build_workbook(
    extraction: &RiskExtraction,
    scores: &Scores,
    forensic_log: &[String],
    run_date: NaiveDate,
) -> AuditResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    write_dashboard(&mut workbook, scores, run_date)?;

    let persons = extraction.unique_persons();
    if !persons.is_empty() {
        write_persons(&mut workbook, &persons)?;
    }

    if !extraction.historial_juridico.is_empty() {
        write_findings(
            &mut workbook,
            "Historial_Juridico",
            &extraction.historial_juridico,
        )?;
    }

    if !extraction.historial_sarlaft.is_empty() {
        write_findings(
            &mut workbook,
            "Historial_Sarlaft",
            &extraction.historial_sarlaft,
        )?;
    }

    write_log(&mut workbook, forensic_log)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_dashboard(workbook: &mut Workbook, scores: &Scores, run_date: NaiveDate) -> AuditResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Dashboard")?;

    let headers = [
        "Fecha",
        "Juridico",
        "SARLAFT",
        "Alertas Jur",
        "Alertas SARLAFT",
        "Forense",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    let verdict = if scores.legal.score == 0 {
        "ADULTERADO"
    } else {
        "OK"
    };

    sheet.write_string(1, 0, run_date.format("%Y-%m-%d").to_string())?;
    sheet.write_number(1, 1, scores.legal.score as f64)?;
    sheet.write_number(1, 2, scores.compliance.score as f64)?;
    sheet.write_string(1, 3, scores.legal.reasons.join("; "))?;
    sheet.write_string(1, 4, scores.compliance.reasons.join("; "))?;
    sheet.write_string(1, 5, verdict)?;
    Ok(())
}

fn write_persons(workbook: &mut Workbook, persons: &[&PersonRecord]) -> AuditResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Base_Personas_Inspektor")?;

    for (col, header) in PERSON_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    sheet.write_string(0, PERSON_COLUMNS.len() as u16, "Estado_Inspektor")?;

    for (i, person) in persons.iter().enumerate() {
        let row = i as u32 + 1;
        // Fields missing upstream are already empty strings, so absent
        // columns come out as empty cells.
        sheet.write_string(row, 0, person.tipo_documento.as_str())?;
        sheet.write_string(row, 1, person.numero_documento.as_str())?;
        sheet.write_string(row, 2, person.nombre.as_str())?;
        sheet.write_string(row, 3, person.rol.as_str())?;
        sheet.write_string(row, 4, person.ubicacion.as_str())?;
        sheet.write_string(row, 5, person.anotacion.as_str())?;
        sheet.write_string(row, 6, "Pendiente Validar")?;
    }
    Ok(())
}

fn write_findings(workbook: &mut Workbook, name: &str, findings: &[Finding]) -> AuditResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;

    for (col, header) in FINDING_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, finding) in findings.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, finding.concepto.as_str())?;
        sheet.write_string(row, 1, finding.estado.as_str())?;
        sheet.write_string(row, 2, finding.anotacion.as_str())?;
        sheet.write_string(row, 3, finding.detalle.as_str())?;
    }
    Ok(())
}

fn write_log(workbook: &mut Workbook, log: &[String]) -> AuditResult<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name("Log_Forense")?;

    sheet.write_string(0, 0, "Log")?;
    for (i, line) in log.iter().enumerate() {
        sheet.write_string(i as u32 + 1, 0, line.as_str())?;
    }
    Ok(())
}
