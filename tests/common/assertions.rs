//! Custom assertions shared across test files.

use ctl_auditor::ForensicReport;

/// Asserts that the bytes look like an xlsx (zip) container.
pub fn assert_xlsx(bytes: &[u8]) {
    assert!(bytes.len() > 4, "workbook should not be empty");
    assert_eq!(&bytes[0..2], b"PK", "workbook should be a zip container");
}

/// Asserts that a forensic report flagged exactly the given pages.
pub fn assert_pages_flagged(report: &ForensicReport, pages: &[u32]) {
    assert_eq!(
        report.affected_pages, pages,
        "unexpected affected pages; log: {:?}",
        report.log
    );
    assert_eq!(report.adulterated, !pages.is_empty());
}
