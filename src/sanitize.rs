//! Field accessors that resolve absent values to their documented defaults.
//!
//! Nothing here fails. `year`, `edition` and `accessed` carry real defaults;
//! every other absent field reads as the empty string.

use crate::ReferenceInput;
use crate::error::fields;
use chrono::NaiveDate;

/// Placeholder year for undated sources.
pub const NO_DATE: &str = "n.d.";

/// `DD Month YYYY`, e.g. `01 January 2021`.
const ACCESSED_FORMAT: &str = "%d %B %Y";

/// A text field, or `""` when absent or not a single string.
pub fn text<'a>(input: &'a ReferenceInput, key: &str) -> &'a str {
    input.text(key).unwrap_or_default()
}

/// The `year` field, or `n.d.` when absent or blank.
pub fn year(input: &ReferenceInput) -> &str {
    match input.text(fields::YEAR) {
        Some(year) if !year.trim().is_empty() => year,
        _ => NO_DATE,
    }
}

/// The edition fragment, e.g. `3 edn.`.
///
/// First editions are not annotated, so `None` is returned when the field is
/// absent, blank or `"1"`.
pub fn edition(input: &ReferenceInput) -> Option<String> {
    let edition = input.text(fields::EDITION)?.trim();
    if edition.is_empty() || edition == "1" {
        None
    } else {
        Some(format!("{edition} edn."))
    }
}

/// The `accessed` field, or `today` formatted as `DD Month YYYY`.
pub fn accessed(input: &ReferenceInput, today: NaiveDate) -> String {
    match input.text(fields::ACCESSED) {
        Some(accessed) if !accessed.trim().is_empty() => accessed.to_string(),
        _ => format_accessed_date(today),
    }
}

/// Format a date the way Harvard access dates are written.
pub fn format_accessed_date(date: NaiveDate) -> String {
    date.format(ACCESSED_FORMAT).to_string()
}
