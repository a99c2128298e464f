//! PDF metadata inspection.
//!
//! Registry certificates are produced by the registry's own renderer; a
//! producer or creator string naming a word processor or a consumer PDF
//! editor means the file was re-saved by an editing tool.

use lopdf::{Dictionary, Document, Object};

use super::{MetadataOutcome, MetadataReport};

/// Software name fragments that never appear on an untouched certificate.
const DENYLIST: &[&str] = &[
    "word",
    "office",
    "ilovepdf",
    "smallpdf",
    "photoshop",
    "gimp",
    "canva",
    "nitro",
    "phantompdf",
];

/// Inspects the document info dictionary for editing-tool signatures.
///
/// Read failures of any kind are swallowed: the inspector always returns a
/// report, defaulted and tagged [`MetadataOutcome::Defaulted`] when the info
/// dictionary is unreachable.
#[derive(Debug, Clone, Default)]
pub struct MetadataInspector;

impl MetadataInspector {
    /// Creates a new metadata inspector.
    pub fn new() -> Self {
        Self
    }

    /// Runs the denylist check over raw PDF bytes.
    pub fn inspect(&self, bytes: &[u8]) -> MetadataReport {
        let doc = match Document::load_mem(bytes) {
            Ok(doc) => doc,
            Err(_) => return MetadataReport::default(),
        };

        // No info dictionary means no software signature at all; keep the
        // "Desconocido" default rather than reporting an empty read.
        let info = match info_dictionary(&doc) {
            Some(info) => info,
            None => return MetadataReport::default(),
        };

        let producer = string_entry(info, b"Producer").unwrap_or_default();
        let creator = string_entry(info, b"Creator").unwrap_or_default();
        let software = format!("{} {}", producer, creator).to_lowercase();

        let adulterated = DENYLIST.iter().any(|fragment| software.contains(fragment));

        MetadataReport {
            adulterated,
            software,
            outcome: MetadataOutcome::Read,
        }
    }
}

/// Resolves the trailer's info dictionary, if the document has one.
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Reads a string entry from the info dictionary, if present.
fn string_entry(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}
