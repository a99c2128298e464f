//! Page-by-page PIN scanner.
//!
//! Authentic certificate pages print a PIN whose leading six digits repeat
//! the printing date as `yymmdd`. A page whose PIN does not start with the
//! prefix computed from its own printed date has been tampered with.

use lopdf::Document;

use super::ForensicReport;
use crate::domain::{PinMatcher, PrintDateMatcher};
use crate::error::AuditError;

/// Scans every page of a certificate for PIN-vs-date consistency.
///
/// The scanner never fails: unreadable documents or pages produce log lines
/// and the report is returned as far as the scan got.
#[derive(Debug, Clone, Default)]
pub struct PageScanner {
    pin: PinMatcher,
    date: PrintDateMatcher,
}

impl PageScanner {
    /// Creates a new page scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the scan over raw PDF bytes.
    pub fn scan(&self, bytes: &[u8]) -> ForensicReport {
        let mut report = ForensicReport::default();

        let doc = match Document::load_mem(bytes) {
            Ok(doc) => doc,
            Err(e) => {
                report
                    .log
                    .push(format!("Error de lectura: {}", AuditError::from(e)));
                return report;
            }
        };

        // get_pages is a BTreeMap keyed by 1-based page number, so iteration
        // follows document order.
        for (&page_number, _) in doc.get_pages().iter() {
            let text = match doc.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    report.log.push(format!(
                        "Error de lectura en pag {}: {}",
                        page_number,
                        AuditError::from(e)
                    ));
                    continue;
                }
            };

            let pin = self.pin.find(&text);
            let date = self.date.find(&text);

            match (pin, date) {
                (Some(pin), Some(date)) => {
                    if report.document_date.is_none() {
                        report.document_date = Some(date.document_date());
                    }

                    let expected = date.expected_pin_prefix();
                    if pin.starts_with(&expected) {
                        report.log.push(format!("PAG {}: PIN OK", page_number));
                    } else {
                        report.adulterated = true;
                        report.affected_pages.push(page_number);
                        report.log.push(format!(
                            "PAG {}: PIN ({}) no coincide con fecha ({}/{}/{})",
                            page_number, pin, date.day, date.month_name, date.year
                        ));
                    }
                }
                (None, Some(_)) => {
                    report
                        .log
                        .push(format!("PAG {}: Fecha visible pero sin PIN", page_number));
                }
                // Pages without a print stamp (covers, attachments) are not
                // part of the audit trail.
                _ => {}
            }
        }

        report
    }
}
