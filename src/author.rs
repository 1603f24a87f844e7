//! Conversion of free-text full names into Harvard `Surname, I.` author lists.
//!
//! Two joining policies exist because author data arrives in two shapes:
//!
//! - an already-split list of names, joined with `and` before the last name
//!   ([`format_author_list`]);
//! - a single comma-joined string, where three or more people collapse to
//!   `First et al.` ([`format_author_string`]).
//!
//! The policies give different output for three or more authors and are
//! deliberately kept apart.

use compact_str::CompactString;
use itertools::Itertools;

/// Format a single full name as `Surname, I.I.`.
///
/// The last whitespace-delimited token is the surname; each preceding token
/// contributes its uppercased first character followed by a period. A name
/// with a single token is returned as the bare surname (`"Plato"`, not
/// `"Plato, "` with a dangling separator).
///
/// # Examples
///
/// ```
/// use harvref::author::format_author_name;
///
/// assert_eq!(format_author_name("John Michael Smith"), "Smith, J.M.");
/// assert_eq!(format_author_name("Plato"), "Plato");
/// ```
pub fn format_author_name(name: &str) -> String {
    let Some((given, surname)) = split_surname(name) else {
        tracing::warn!("blank author name passed to the normalizer");
        return String::new();
    };
    let initials = initials(given);
    if initials.is_empty() {
        surname.to_string()
    } else {
        format!("{surname}, {initials}")
    }
}

/// Split a name into its given-name tokens and surname.
fn split_surname(name: &str) -> Option<(Vec<&str>, &str)> {
    let mut tokens: Vec<&str> = name.split_whitespace().collect();
    let surname = tokens.pop()?;
    Some((tokens, surname))
}

/// One uppercased initial plus period per given-name token, no separators.
fn initials(given: Vec<&str>) -> CompactString {
    let mut out = CompactString::const_new("");
    for first in given.into_iter().filter_map(|token| token.chars().next()) {
        out.extend(first.to_uppercase());
        out.push('.');
    }
    out
}

/// Format an ordered list of full names, joining with commas and `and`.
///
/// 0 names give an empty string, 2 give `A and B`, and 3 or more give
/// `A, B and C` with no comma before `and`. Order is preserved.
///
/// # Examples
///
/// ```
/// use harvref::author::format_author_list;
///
/// let authors = ["Jane Doe", "John Roe", "Ann Poe"];
/// assert_eq!(format_author_list(&authors), "Doe, J., Roe, J. and Poe, A.");
/// ```
pub fn format_author_list<S: AsRef<str>>(names: &[S]) -> String {
    let formatted: Vec<String> = names
        .iter()
        .map(|name| format_author_name(name.as_ref()))
        .collect();

    match formatted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.iter().join(", "), last),
    }
}

/// Format a single comma-joined string of full names.
///
/// The string is split on commas and each trimmed piece is formatted with
/// [`format_author_name`]. Two people are joined with `and`; three or more
/// collapse to the first person followed by `et al.`
///
/// # Examples
///
/// ```
/// use harvref::author::format_author_string;
///
/// assert_eq!(
///     format_author_string("Jane Doe, John Roe, Ann Poe"),
///     "Doe, J. et al."
/// );
/// ```
pub fn format_author_string(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let formatted: Vec<String> = raw
        .split(',')
        .map(|person| format_author_name(person.trim()))
        .collect();

    match formatted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [first, ..] => format!("{first} et al."),
    }
}

/// Split a comma-joined author string into a list of trimmed, non-blank names.
///
/// This is the collaborator-side step that turns a raw form value into the
/// list shape accepted by [`format_author_list`].
pub fn split_author_string(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|person| !person.is_empty())
        .map(String::from)
        .collect()
}
