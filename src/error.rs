//! Error types for reference formatting operations.
//!
//! Formatting itself only fails on an unknown source-type tag. Absent field
//! values are never errors for the core; they resolve to documented defaults.
//! Field-presence checks belong to the collaborator layer and report through
//! [`ValidationError`].

use crate::SourceType;
use thiserror::Error;

/// Field name constants for consistent lookups and error reporting.
pub mod fields {
    pub const AUTHORS: &str = "authors";
    /// Singular alias accepted for [`AUTHORS`].
    pub const AUTHOR: &str = "author";
    pub const YEAR: &str = "year";
    pub const TITLE: &str = "title";
    pub const EDITION: &str = "edition";
    pub const PLACE: &str = "place";
    pub const PUBLISHER: &str = "publisher";
    pub const JOURNAL: &str = "journal";
    pub const VOLUME: &str = "volume";
    pub const ISSUE: &str = "issue";
    pub const PAGES: &str = "pages";
    pub const ORGANISATION: &str = "organisation";
    pub const WEBSITE_NAME: &str = "website_name";
    pub const URL: &str = "url";
    pub const ACCESSED: &str = "accessed";
}

/// Top-level error type for reference operations.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised by the formatting core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown source type \"{tag}\" (expected one of: book, journal, website)")]
    UnknownSourceType { tag: String },
}

/// Errors raised while checking collected form values before formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No source type selected")]
    NoSourceSelected,

    #[error("Missing required fields for {source_type}: {}", .fields.join(", "))]
    MissingFields {
        source_type: SourceType,
        fields: Vec<&'static str>,
    },
}
