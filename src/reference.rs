//! Sanitized, source-specific reference data.
//!
//! A [`Reference`] is built from a [`ReferenceInput`] once defaults have been
//! applied and authors normalized. Each variant holds only the fields its
//! assembler reads.

use crate::author::{format_author_list, format_author_string};
use crate::error::fields;
use crate::sanitize;
use crate::{FieldValue, ReferenceInput, SourceType};
use chrono::NaiveDate;

/// A book reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub authors: String,
    pub year: String,
    pub title: String,
    /// `None` for first editions.
    pub edition: Option<String>,
    pub place: String,
    pub publisher: String,
}

/// A journal article reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    pub authors: String,
    pub year: String,
    pub title: String,
    pub journal: String,
    pub volume: String,
    pub issue: String,
    pub pages: String,
}

impl Journal {
    /// `V(I)` when both are present, `V` when only the volume is, else `None`.
    pub fn volume_issue(&self) -> Option<String> {
        match (self.volume.is_empty(), self.issue.is_empty()) {
            (false, false) => Some(format!("{}({})", self.volume, self.issue)),
            (false, true) => Some(self.volume.clone()),
            (true, _) => None,
        }
    }
}

/// A website reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Website {
    /// Formatted authors, or the organisation when no authors were given.
    pub author_or_organisation: String,
    pub year: String,
    pub title: String,
    pub website_name: String,
    pub url: String,
    pub accessed: String,
}

/// A sanitized reference of one source type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    Book(Book),
    Journal(Journal),
    Website(Website),
}

impl Reference {
    /// Build the reference for `source_type` from raw input.
    ///
    /// `today` is the fallback for a website's `accessed` date.
    pub fn from_input(source_type: SourceType, input: &ReferenceInput, today: NaiveDate) -> Self {
        let authors = normalize_authors(input);
        let year = sanitize::year(input).to_string();
        let title = sanitize::text(input, fields::TITLE).to_string();
        let text = |key: &str| sanitize::text(input, key).to_string();

        match source_type {
            SourceType::Book => Reference::Book(Book {
                authors,
                year,
                title,
                edition: sanitize::edition(input),
                place: text(fields::PLACE),
                publisher: text(fields::PUBLISHER),
            }),
            SourceType::Journal => Reference::Journal(Journal {
                authors,
                year,
                title,
                journal: text(fields::JOURNAL),
                volume: text(fields::VOLUME),
                issue: text(fields::ISSUE),
                pages: text(fields::PAGES),
            }),
            SourceType::Website => {
                let author_or_organisation = if authors.is_empty() {
                    organisation(input).to_string()
                } else {
                    authors
                };
                Reference::Website(Website {
                    author_or_organisation,
                    year,
                    title,
                    website_name: text(fields::WEBSITE_NAME),
                    url: text(fields::URL),
                    accessed: sanitize::accessed(input, today),
                })
            }
        }
    }

    /// The source type of this reference.
    pub fn source_type(&self) -> SourceType {
        match self {
            Reference::Book(_) => SourceType::Book,
            Reference::Journal(_) => SourceType::Journal,
            Reference::Website(_) => SourceType::Website,
        }
    }
}

/// Normalize the `authors` field (or its `author` alias).
///
/// A list goes through the list policy; a single string is treated as a
/// comma-joined list and goes through the comma-string policy.
fn normalize_authors(input: &ReferenceInput) -> String {
    let value = input
        .get(fields::AUTHORS)
        .or_else(|| input.get(fields::AUTHOR));
    match value {
        Some(FieldValue::List(names)) => format_author_list(names),
        Some(FieldValue::Text(raw)) => format_author_string(raw),
        None => String::new(),
    }
}

/// `organisation`, falling back to `website_name`.
fn organisation(input: &ReferenceInput) -> &str {
    [fields::ORGANISATION, fields::WEBSITE_NAME]
        .into_iter()
        .filter_map(|key| input.text(key))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
}
