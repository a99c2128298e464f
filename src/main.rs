//! CTL Certificate Audit CLI.
//!
//! This binary drives the full audit pipeline for a single certificate:
//! forensic page scan, metadata inspection, generative risk extraction,
//! scoring, and the xlsx report export.

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ctl_auditor::{
    build_workbook, calculate_scores, document_text, AuditError, GeminiClient, MetadataInspector,
    PageScanner, RiskExtractor, ScoreResult, DEFAULT_MODEL, REPORT_FILENAME,
};

/// CTL Certificate Audit Tool
///
/// Audits a property-registry certificate PDF for forgery and
/// legal/compliance risk. By default, runs the full analysis. Use the
/// 'extract' subcommand to dump the document text.
#[derive(Parser)]
#[command(name = "ctl-auditor")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input certificate PDF
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output spreadsheet path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Gemini API key (defaults to the GOOGLE_API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Gemini model to use for extraction
    #[arg(long, value_name = "MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a certificate PDF (for debugging and verification)
    Extract {
        /// Input PDF file path
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output text file (optional, defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Audit command handler with dependency injection.
struct AuditHandler {
    verbose: bool,
}

impl AuditHandler {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Executes the full audit pipeline for one certificate.
    fn audit(&self, input: &Path, output: &Path, api_key: &str, model: &str) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let bytes = std::fs::read(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;

        println!("Fase 1: Escaneo forense PIN vs fecha...");
        let forensic = PageScanner::new().scan(&bytes);

        println!("Fase 2: Analisis de metadatos...");
        let metadata = MetadataInspector::new().inspect(&bytes);

        println!("Fase 3: Extraccion de historial con IA ({})...", model);
        let extractor = RiskExtractor::new(Box::new(GeminiClient::new(api_key, model)));
        let extraction = extractor
            .extract(&bytes)
            .with_context(|| "Risk extraction failed")?;

        let today = Local::now().date_naive();
        let scores = calculate_scores(&extraction, &forensic, &metadata, today);

        // Forensic verdict banner
        println!();
        if forensic.adulterated || metadata.adulterated {
            println!("FRAUDE DETECTADO");
            for line in &forensic.log {
                println!("  {}", line);
            }
            println!("  Software: {}", metadata.software);
        } else {
            println!("Documento autentico (PIN valido)");
        }

        println!();
        print_score("JURIDICO", &scores.legal, "Sin alertas graves");
        print_score("SARLAFT", &scores.compliance, "Cumplimiento OK");

        if self.verbose {
            println!();
            println!("Municipio: {}", extraction.municipio);
            println!(
                "Registros unicos consolidados: {}",
                extraction.unique_persons().len()
            );
            println!(
                "Hallazgos juridicos: {}",
                extraction.historial_juridico.len()
            );
            println!("Hallazgos SARLAFT: {}", extraction.historial_sarlaft.len());
            if let Some(date) = &forensic.document_date {
                println!("Fecha del documento: {}", date);
            }
        }

        let workbook = build_workbook(&extraction, &scores, &forensic.log, today)
            .with_context(|| "Report serialization failed")?;
        std::fs::write(output, workbook)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        println!();
        println!("✓ Reporte exportado → {}", output.display());

        Ok(())
    }

    /// Extracts document text to stdout or a file.
    fn extract(&self, input: &Path, output: Option<&Path>) -> Result<()> {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }

        let bytes = std::fs::read(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;
        let text = document_text(&bytes).with_context(|| "Text extraction failed")?;

        if let Some(output_path) = output {
            std::fs::write(output_path, &text)
                .with_context(|| format!("Failed to write to {}", output_path.display()))?;
            println!(
                "✓ Extracted {} characters → {}",
                text.len(),
                output_path.display()
            );
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}

fn print_score(label: &str, result: &ScoreResult, all_clear: &str) {
    println!("{}: {}/100", label, result.score);
    if result.reasons.is_empty() {
        println!("  {}", all_clear);
    } else {
        for reason in &result.reasons {
            println!("  ! {}", reason);
        }
    }
}

/// Resolves the API credential from the flag or the environment.
fn resolve_api_key(flag: Option<String>) -> Result<String> {
    if let Some(key) = flag {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }
    match std::env::var("GOOGLE_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AuditError::MissingCredential {
            name: "GOOGLE_API_KEY".to_string(),
        })
        .context("Falta la API KEY: pase --api-key o defina GOOGLE_API_KEY"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handler = AuditHandler::new(cli.verbose);

    match &cli.command {
        Some(Commands::Extract { input, output }) => {
            handler.extract(input, output.as_deref())?;
        }
        None => {
            let input = cli
                .input
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("an input PDF is required"))?;
            let output = cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(REPORT_FILENAME));

            // The credential check runs before any analysis work
            let api_key = resolve_api_key(cli.api_key.clone())?;
            handler.audit(input, &output, &api_key, &cli.model)?;
        }
    }

    Ok(())
}
