//! Static field schemas for each source type.
//!
//! The table is defined once and never mutated. Field order is the order a
//! form collects the values in.

use crate::SourceType;
use crate::error::fields;

/// How a field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// Satisfied by this field or the named alternative.
    EitherOf(&'static str),
}

/// One recognised field of a source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub requirement: Requirement,
}

impl FieldRule {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Required,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::Optional,
        }
    }

    const fn either_of(name: &'static str, other: &'static str) -> Self {
        Self {
            name,
            requirement: Requirement::EitherOf(other),
        }
    }
}

/// The recognised fields of one source type.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceTypeSchema {
    pub source_type: SourceType,
    pub fields: &'static [FieldRule],
}

impl SourceTypeSchema {
    /// Field names in collection order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|rule| rule.name)
    }

    /// Whether `name` is recognised by this source type.
    pub fn recognizes(&self, name: &str) -> bool {
        self.fields.iter().any(|rule| rule.name == name)
    }
}

static BOOK: SourceTypeSchema = SourceTypeSchema {
    source_type: SourceType::Book,
    fields: &[
        FieldRule::required(fields::AUTHORS),
        FieldRule::required(fields::YEAR),
        FieldRule::required(fields::TITLE),
        FieldRule::optional(fields::EDITION),
        FieldRule::required(fields::PLACE),
        FieldRule::required(fields::PUBLISHER),
    ],
};

static JOURNAL: SourceTypeSchema = SourceTypeSchema {
    source_type: SourceType::Journal,
    fields: &[
        FieldRule::required(fields::AUTHORS),
        FieldRule::required(fields::YEAR),
        FieldRule::required(fields::TITLE),
        FieldRule::required(fields::JOURNAL),
        FieldRule::required(fields::VOLUME),
        FieldRule::required(fields::ISSUE),
        FieldRule::required(fields::PAGES),
    ],
};

static WEBSITE: SourceTypeSchema = SourceTypeSchema {
    source_type: SourceType::Website,
    fields: &[
        FieldRule::either_of(fields::AUTHORS, fields::ORGANISATION),
        FieldRule::either_of(fields::ORGANISATION, fields::AUTHORS),
        FieldRule::required(fields::YEAR),
        FieldRule::required(fields::TITLE),
        FieldRule::required(fields::WEBSITE_NAME),
        FieldRule::required(fields::URL),
        FieldRule::optional(fields::ACCESSED),
    ],
};

/// Look up the schema for a source type.
pub fn schema_for(source_type: SourceType) -> &'static SourceTypeSchema {
    match source_type {
        SourceType::Book => &BOOK,
        SourceType::Journal => &JOURNAL,
        SourceType::Website => &WEBSITE,
    }
}
