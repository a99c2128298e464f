//! Test fixtures and PDF builders.
//!
//! Provides a builder for creating certificate-like PDFs with specific page
//! content and metadata, following the Builder pattern for clean test setup.

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

/// One page of a test certificate: either text lines rendered as content
/// operations, or a content stream the decoder cannot parse.
#[derive(Debug, Clone)]
enum PageSpec {
    Text(Vec<String>),
    CorruptStream,
}

/// Builder for creating test certificate PDFs.
///
/// Chained `with_*` calls add pages and metadata; `build_bytes` emits the
/// document in memory and `build` writes it to disk.
#[derive(Debug, Clone, Default)]
pub struct CtlPdfBuilder {
    pages: Vec<PageSpec>,
    producer: Option<String>,
    creator: Option<String>,
}

impl CtlPdfBuilder {
    /// Creates a new builder with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page with arbitrary text lines.
    pub fn with_page(mut self, lines: &[&str]) -> Self {
        self.pages
            .push(PageSpec::Text(lines.iter().map(|l| l.to_string()).collect()));
        self
    }

    /// Adds a page whose content stream cannot be decoded, so per-page text
    /// extraction fails for this page only.
    pub fn with_corrupt_page(mut self) -> Self {
        self.pages.push(PageSpec::CorruptStream);
        self
    }

    /// Adds a standard certificate page carrying a PIN and a print stamp.
    pub fn with_certificate_page(self, pin: &str, printed: &str) -> Self {
        let pin_line = format!("Pin No: {}", pin);
        let date_line = format!("Impreso el {}", printed);
        self.with_page(&[
            "CERTIFICADO DE TRADICION Y LIBERTAD",
            pin_line.as_str(),
            date_line.as_str(),
            "ANOTACION 1: COMPRAVENTA",
        ])
    }

    /// Sets the /Producer metadata field.
    pub fn with_producer(mut self, producer: &str) -> Self {
        self.producer = Some(producer.to_string());
        self
    }

    /// Sets the /Creator metadata field.
    pub fn with_creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Builds the PDF in memory.
    pub fn build_bytes(self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in &self.pages {
            let content_id = match page {
                PageSpec::Text(lines) => {
                    let mut operations = vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![50.into(), 780.into()]),
                    ];
                    for (i, line) in lines.iter().enumerate() {
                        if i > 0 {
                            // Relative move down one text line
                            operations.push(Operation::new("Td", vec![0.into(), (-18).into()]));
                        }
                        operations
                            .push(Operation::new("Tj", vec![Object::string_literal(line.as_str())]));
                    }
                    operations.push(Operation::new("ET", vec![]));

                    let content = Content { operations };
                    doc.add_object(Stream::new(dictionary! {}, content.encode()?))
                }
                // A Tf operator with no operands makes extract_text fail
                // with a syntax error for this page only
                PageSpec::CorruptStream => doc.add_object(Stream::new(
                    dictionary! {},
                    b"BT Tf (x) Tj ET".to_vec(),
                )),
            };
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if self.producer.is_some() || self.creator.is_some() {
            let mut info = lopdf::Dictionary::new();
            if let Some(producer) = &self.producer {
                info.set("Producer", Object::string_literal(producer.as_str()));
            }
            if let Some(creator) = &self.creator {
                info.set("Creator", Object::string_literal(creator.as_str()));
            }
            let info_id = doc.add_object(info);
            doc.trailer.set("Info", info_id);
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Builds the PDF and writes it to the specified path.
    pub fn build(self, output_path: &Path) -> Result<PathBuf> {
        let bytes = self.build_bytes()?;
        std::fs::write(output_path, bytes)?;
        Ok(output_path.to_path_buf())
    }
}

/// Quick helper: a clean single-page certificate whose PIN matches its date.
pub fn clean_certificate() -> Result<Vec<u8>> {
    CtlPdfBuilder::new()
        .with_certificate_page("240610123", "10 de Junio de 2024")
        .with_producer("Registro SNR Render")
        .build_bytes()
}

/// Quick helper: a certificate whose PIN contradicts its printed date.
pub fn tampered_certificate() -> Result<Vec<u8>> {
    CtlPdfBuilder::new()
        .with_certificate_page("240611123", "10 de Junio de 2024")
        .with_producer("Registro SNR Render")
        .build_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_loadable_pdf() -> Result<()> {
        let bytes = clean_certificate()?;
        let doc = Document::load_mem(&bytes)?;
        assert_eq!(doc.get_pages().len(), 1);
        Ok(())
    }
}
