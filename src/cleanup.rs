//! Final tidy-up of assembled reference text.
//!
//! Runs of two or more periods collapse to one and surrounding whitespace is
//! trimmed. Doubled commas and doubled spaces are left as they are.

use crate::style::Assembly;
use crate::{EmphasisSpan, FormattedReference};

/// Collapse repeated periods and trim the text.
///
/// # Examples
///
/// ```
/// use harvref::cleanup::cleanup;
///
/// assert_eq!(cleanup("  Smith, J.. (2020) Title... "), "Smith, J. (2020) Title.");
/// ```
pub fn cleanup(text: &str) -> String {
    let mut text = text.to_string();
    while text.contains("..") {
        text = text.replace("..", ".");
    }
    text.trim().to_string()
}

/// Apply [`cleanup`] across fragment boundaries, keeping emphasis spans
/// aligned with the cleaned text.
pub fn cleanup_assembly(assembly: &Assembly) -> FormattedReference {
    let mut text = String::new();
    let mut spans = Vec::new();

    for fragment in assembly.fragments() {
        let start = text.len();
        for c in fragment.text.chars() {
            if c == '.' && text.ends_with('.') {
                continue;
            }
            text.push(c);
        }
        if fragment.emphasized {
            spans.push(EmphasisSpan::new(start, text.len()));
        }
    }

    let lead = text.len() - text.trim_start().len();
    let keep = text.trim_end().len().max(lead);
    let spans = spans
        .into_iter()
        .map(|span| {
            EmphasisSpan::new(
                span.start.clamp(lead, keep) - lead,
                span.end.clamp(lead, keep) - lead,
            )
        })
        .filter(|span| span.end > span.start)
        .collect();

    FormattedReference::new(text[lead..keep].to_string(), spans)
}
