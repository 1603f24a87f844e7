//! Harvard-style reference formatting for books, journal articles and websites.
//!
//! `harvref` turns a mapping of field names to values into a single Harvard
//! reference string. Every request runs the same pipeline:
//!
//! 1. absent `year`, `edition` and `accessed` values resolve to their defaults
//!    ([`sanitize`]);
//! 2. author names become `Surname, I.` lists ([`author`]);
//! 3. the source type's assembler lays the fragments out in order ([`style`]);
//! 4. doubled periods are collapsed and the result is trimmed ([`cleanup`]).
//!
//! # Basic Usage
//!
//! ```rust
//! use harvref::{ReferenceInput, format};
//!
//! let input = ReferenceInput::new()
//!     .with("authors", vec!["John Smith"])
//!     .with("year", "2020")
//!     .with("title", "Design Patterns")
//!     .with("edition", "1")
//!     .with("place", "London")
//!     .with("publisher", "Pearson");
//!
//! let reference = format("book", &input).unwrap();
//! assert_eq!(reference.text(), "Smith, J. (2020) Design Patterns. London: Pearson.");
//! ```
//!
//! # Emphasis
//!
//! Book titles and journal names are italic in Harvard style. The formatter does
//! not embed markup for them; instead [`FormattedReference`] reports byte spans
//! that a presentation layer can render however it likes:
//!
//! ```rust
//! use harvref::{ReferenceInput, SourceType, format_reference};
//!
//! let input = ReferenceInput::new()
//!     .with("authors", vec!["Jane Doe"])
//!     .with("year", "2019")
//!     .with("title", "On Testing")
//!     .with("journal", "J. Software")
//!     .with("volume", "5")
//!     .with("pages", "10-20");
//!
//! let reference = format_reference(SourceType::Journal, &input);
//! assert_eq!(reference.emphasized().collect::<Vec<_>>(), vec!["J. Software"]);
//! assert_eq!(
//!     reference.to_markdown(),
//!     "Doe, J. (2019) 'On Testing', *J. Software*, 5, pp. 10-20."
//! );
//! ```
//!
//! # Error Handling
//!
//! The only formatting failure is an unknown source-type tag, reported as
//! [`FormatError::UnknownSourceType`]. Missing fields never fail: they render
//! as documented defaults or as empty text. Checking that a form supplied every
//! required field is the caller's job; the `form` feature provides
//! [`form::missing_fields`] and [`form::render`] for that.
//!
//! # Thread Safety
//!
//! Formatting is pure and holds no shared state. [`HarvardFormatter`] can be
//! shared between threads.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod author;
pub mod cleanup;
pub mod error;
#[cfg(feature = "form")]
pub mod form;
pub mod formatter;
pub mod reference;
pub mod sanitize;
pub mod schema;
pub mod style;

// Reexports
pub use error::{FormatError, ReferenceError, ValidationError};
pub use formatter::{FormatterConfig, HarvardFormatter, QuoteStyle};
pub use reference::Reference;
pub use schema::{FieldRule, Requirement, SourceTypeSchema};

/// Source types supported by the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Book,
    Journal,
    Website,
}

impl SourceType {
    /// All source types, in the order a form presents them.
    pub const ALL: [SourceType; 3] = [SourceType::Book, SourceType::Journal, SourceType::Website];

    /// Convert the source type to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Book => "Book",
            SourceType::Journal => "Journal",
            SourceType::Website => "Website",
        }
    }

    /// The static field schema for this source type.
    pub fn schema(&self) -> &'static SourceTypeSchema {
        schema::schema_for(*self)
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SourceType {
    type Err = FormatError;

    /// Parse a source-type tag, ignoring ASCII case and surrounding whitespace.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let trimmed = tag.trim();
        SourceType::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FormatError::UnknownSourceType {
                tag: tag.to_string(),
            })
    }
}

/// The value of one input field: a single string or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// The value as text, if it is a single string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    /// Whether the value carries no visible content.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(String::from).collect())
    }
}

/// Field name to value mapping supplied for one formatting request.
///
/// Keys not recognised by the chosen source type are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceInput {
    fields: HashMap<String, FieldValue>,
}

impl ReferenceInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, returning `self` (builder style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Look up a field holding a single string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Whether the field is absent or blank.
    pub fn is_blank(&self, key: &str) -> bool {
        self.get(key).is_none_or(FieldValue::is_blank)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ReferenceInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A byte-offset span into a formatted reference marking emphasised text.
///
/// `start` is inclusive, `end` is exclusive. Both are byte offsets (not
/// character indices) that fall on char boundaries of the reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmphasisSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl EmphasisSpan {
    /// Create a new `EmphasisSpan`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A finished Harvard reference with its emphasis spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedReference {
    text: String,
    emphasis: Vec<EmphasisSpan>,
}

impl FormattedReference {
    /// Spans must be ascending, non-overlapping and on char boundaries of `text`.
    pub(crate) fn new(text: String, emphasis: Vec<EmphasisSpan>) -> Self {
        debug_assert!(emphasis.windows(2).all(|w| w[0].end <= w[1].start));
        debug_assert!(emphasis.iter().all(|span| text.get(span.start..span.end).is_some()));
        Self { text, emphasis }
    }

    /// The reference text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Emphasis spans in ascending order.
    pub fn emphasis(&self) -> &[EmphasisSpan] {
        &self.emphasis
    }

    /// The emphasised substrings in order.
    pub fn emphasized(&self) -> impl Iterator<Item = &str> {
        self.emphasis
            .iter()
            .map(|span| &self.text[span.start..span.end])
    }

    /// Split the text into consecutive `(substring, emphasised)` runs.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut segments = Vec::with_capacity(self.emphasis.len() * 2 + 1);
        let mut cursor = 0;
        for span in &self.emphasis {
            if span.start > cursor {
                segments.push((&self.text[cursor..span.start], false));
            }
            if span.end > span.start {
                segments.push((&self.text[span.start..span.end], true));
            }
            cursor = span.end;
        }
        if cursor < self.text.len() {
            segments.push((&self.text[cursor..], false));
        }
        segments
    }

    /// Render the reference with emphasised runs wrapped in `*`.
    pub fn to_markdown(&self) -> String {
        self.segments()
            .into_iter()
            .map(|(text, emphasised)| {
                if emphasised {
                    format!("*{text}*")
                } else {
                    text.to_string()
                }
            })
            .collect()
    }

    /// Consume the reference, returning the plain text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for FormattedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for FormattedReference {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Format a reference from a source-type tag such as `"book"`.
///
/// Uses a [`HarvardFormatter`] with the default configuration, so a missing
/// `accessed` date on a website falls back to today's local date.
///
/// # Errors
///
/// Returns [`FormatError::UnknownSourceType`] when `source_type` is not one of
/// `book`, `journal` or `website`.
///
/// # Examples
///
/// ```
/// use harvref::{FormatError, ReferenceInput, format};
///
/// let result = format("podcast", &ReferenceInput::new());
/// assert!(matches!(result, Err(FormatError::UnknownSourceType { .. })));
/// ```
pub fn format(
    source_type: &str,
    input: &ReferenceInput,
) -> std::result::Result<FormattedReference, FormatError> {
    HarvardFormatter::new().format_tagged(source_type, input)
}

/// Format a reference for an already-parsed [`SourceType`].
pub fn format_reference(source_type: SourceType, input: &ReferenceInput) -> FormattedReference {
    HarvardFormatter::new().format(source_type, input)
}
