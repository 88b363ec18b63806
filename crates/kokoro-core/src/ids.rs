//! Identifier and display-name conventions.
//!
//! Pure string functions. These define the canonical textual form of every
//! identifier the dashboard shows or searches on.

pub const PATIENT_PREFIX: &str = "P";

pub const ANONYMOUS_PREFIX: &str = "PT-";

pub const ANONYMIZED_SUFFIX: &str = " (anonymized)";

/// `P` followed by the patient number, zero-padded to three digits.
pub fn patient(number: u32) -> String {
    format!("{PATIENT_PREFIX}{number:03}")
}

/// Anonymous identifier used for similar-case neighbors, e.g. `PT-2806`.
pub fn anonymous(number: u32) -> String {
    format!("{ANONYMOUS_PREFIX}{number}")
}

pub fn display_name(surname: &str, given_name: &str) -> String {
    format!("{surname} {given_name}{ANONYMIZED_SUFFIX}")
}

/// The display name without the anonymization marker.
pub fn strip_anonymized(name: &str) -> &str {
    name.strip_suffix(ANONYMIZED_SUFFIX).unwrap_or(name)
}
