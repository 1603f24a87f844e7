//! Harvard assemblers for each source type.
//!
//! An assembler lays a sanitized [`Reference`] out as an ordered list of
//! [`Fragment`]s. Parts are separated by single spaces, and optional parts
//! that are absent are skipped entirely so no separator is left behind.
//! Emphasised fragments stay separate so their position survives cleanup.

mod book;
mod journal;
mod website;

use crate::Reference;
use crate::formatter::FormatterConfig;

/// One run of reference text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    /// Rendered in italics by a presentation layer.
    pub emphasized: bool,
}

/// Ordered fragments of a reference before cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    fragments: Vec<Fragment>,
}

impl Assembly {
    /// Create a new empty assembly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append plain text. Empty text is dropped.
    pub fn plain(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text.into(), false)
    }

    /// Append emphasised text. Empty text is dropped.
    pub fn emphasized(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(text.into(), true)
    }

    /// Start a new part, separated from the previous one by a single space.
    pub fn space(&mut self) -> &mut Self {
        if !self.fragments.is_empty() {
            self.push(" ".to_string(), false);
        }
        self
    }

    fn push(&mut self, text: String, emphasized: bool) -> &mut Self {
        if !text.is_empty() {
            self.fragments.push(Fragment { text, emphasized });
        }
        self
    }

    /// The fragments in order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The concatenated text of every fragment.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

/// Lay out a reference as fragments.
pub trait Assemble {
    fn assemble(&self, config: &FormatterConfig) -> Assembly;
}

impl Assemble for Reference {
    fn assemble(&self, config: &FormatterConfig) -> Assembly {
        match self {
            Reference::Book(book) => book.assemble(config),
            Reference::Journal(journal) => journal.assemble(config),
            Reference::Website(website) => website.assemble(config),
        }
    }
}
