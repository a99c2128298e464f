//! Domain models and business logic for certificate auditing.
//!
//! This module contains the matchers for the printed PIN code and print date,
//! and the typed payload the generative collaborator is asked to return.

pub mod extraction;
pub mod pin;

pub use extraction::{dedup_persons, Finding, PersonRecord, RiskExtraction};
pub use pin::{PinMatcher, PrintDate, PrintDateMatcher};
