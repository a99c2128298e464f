//! PIN and print-date domain logic.
//!
//! Every page of an authentic CTL certificate carries a numeric PIN whose
//! leading digits encode the printing date as `yymmdd`. This module holds the
//! matchers for both printed values and the date arithmetic that ties them
//! together.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matcher for the printed PIN code.
///
/// Accepts the label variations seen on real certificates:
/// - `Pin No: 240610123`
/// - `Pin Numero 240610123`
/// - `PIN # 240610123`
#[derive(Debug, Clone)]
pub struct PinMatcher;

impl PinMatcher {
    /// Creates a new PIN matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?i)Pin\s*(?:N[uú]mero|No\.?|Nro\.?|#)?\s*:?\s*(\d+)")
                .expect("Valid PIN regex")
        });
        &PATTERN
    }

    /// Extracts the first PIN digit run from page text, if any.
    pub fn find(&self, text: &str) -> Option<String> {
        Self::regex()
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

impl Default for PinMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Matcher for the `Impreso el <day> de <month> de <year>` print stamp.
#[derive(Debug, Clone)]
pub struct PrintDateMatcher;

impl PrintDateMatcher {
    /// Creates a new print-date matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?i)Impreso el\s+(\d{1,2})\s+de\s+([A-Za-z]+)\s+de\s+(\d{4})")
                .expect("Valid print-date regex")
        });
        &PATTERN
    }

    /// Extracts the first print date from page text, if any.
    pub fn find(&self, text: &str) -> Option<PrintDate> {
        Self::regex().captures(text).map(|caps| PrintDate {
            day: format!("{:0>2}", &caps[1]),
            month_name: caps[2].to_lowercase(),
            year: caps[3].to_string(),
        })
    }
}

impl Default for PrintDateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// A print date as it appears on a certificate page.
///
/// The day is already zero-padded to two digits and the month name is
/// lower-cased; the year keeps its four digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintDate {
    pub day: String,
    pub month_name: String,
    pub year: String,
}

impl PrintDate {
    /// Maps a Spanish month name to its two-digit number.
    ///
    /// Total over the 12 month names (case handled by the matcher, which
    /// lower-cases); anything unmapped degrades to `"00"` rather than failing
    /// the scan.
    pub fn month_number(name: &str) -> &'static str {
        match name {
            "enero" => "01",
            "febrero" => "02",
            "marzo" => "03",
            "abril" => "04",
            "mayo" => "05",
            "junio" => "06",
            "julio" => "07",
            "agosto" => "08",
            "septiembre" => "09",
            "octubre" => "10",
            "noviembre" => "11",
            "diciembre" => "12",
            _ => "00",
        }
    }

    /// The PIN prefix this date demands: `yymmdd`.
    pub fn expected_pin_prefix(&self) -> String {
        let short_year = if self.year.len() >= 2 {
            &self.year[self.year.len() - 2..]
        } else {
            self.year.as_str()
        };
        format!(
            "{}{}{}",
            short_year,
            Self::month_number(&self.month_name),
            self.day
        )
    }

    /// Formats the date as `DD-MM-YYYY` for the report and the expiry check.
    pub fn document_date(&self) -> String {
        format!(
            "{}-{}-{}",
            self.day,
            Self::month_number(&self.month_name),
            self.year
        )
    }
}
