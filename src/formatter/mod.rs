//! The reference formatting engine.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use harvref::{FormatterConfig, HarvardFormatter, ReferenceInput, SourceType};
//!
//! let mut config = FormatterConfig::new();
//! config.set_accessed_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
//! let formatter = HarvardFormatter::with_config(config);
//!
//! let input = ReferenceInput::new()
//!     .with("organisation", "W3C")
//!     .with("year", "2021")
//!     .with("title", "HTML Spec")
//!     .with("website_name", "W3C")
//!     .with("url", "https://w3.org/html");
//!
//! let reference = formatter.format(SourceType::Website, &input);
//! assert_eq!(
//!     reference.text(),
//!     "W3C (2021) HTML Spec. W3C. Available at: https://w3.org/html (Accessed: 14 October 2026)."
//! );
//! ```

mod config;

use crate::cleanup::cleanup_assembly;
use crate::error::FormatError;
use crate::style::{Assemble, Assembly};
use crate::{FormattedReference, Reference, ReferenceInput, SourceType};
pub use config::{FormatterConfig, QuoteStyle};

/// Formats Harvard references for books, journal articles and websites.
///
/// Each call is independent: the sanitizer fills defaults, authors are
/// normalized, the source type's assembler lays out the fragments and the
/// cleanup pass produces the final text and emphasis spans.
#[derive(Debug, Clone, Default)]
pub struct HarvardFormatter {
    config: FormatterConfig,
}

impl HarvardFormatter {
    /// Creates a new formatter with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new formatter with custom configuration
    #[must_use]
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Sets the configuration for this formatter
    pub fn set_config(&mut self, config: FormatterConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Gets a reference to the current configuration
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Gets a mutable reference to the current configuration
    pub fn config_mut(&mut self) -> &mut FormatterConfig {
        &mut self.config
    }

    /// Formats `input` as a reference of the given source type.
    ///
    /// Never fails: absent fields resolve to their defaults or to empty text.
    pub fn format(&self, source_type: SourceType, input: &ReferenceInput) -> FormattedReference {
        let assembly = self.assemble(source_type, input);
        let reference = cleanup_assembly(&assembly);
        tracing::debug!(
            %source_type,
            emphasis = reference.emphasis().len(),
            "formatted reference"
        );
        reference
    }

    /// Formats `input` for a source-type tag such as `"journal"`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownSourceType`] if the tag is not `book`,
    /// `journal` or `website` (ignoring case).
    pub fn format_tagged(
        &self,
        source_type: &str,
        input: &ReferenceInput,
    ) -> Result<FormattedReference, FormatError> {
        let source_type = source_type.parse::<SourceType>().inspect_err(|err| {
            tracing::warn!("{err}");
        })?;
        Ok(self.format(source_type, input))
    }

    /// Lays out the fragments of a reference without cleaning them up.
    pub fn assemble(&self, source_type: SourceType, input: &ReferenceInput) -> Assembly {
        Reference::from_input(source_type, input, self.config.today()).assemble(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn formatter() -> HarvardFormatter {
        let mut config = FormatterConfig::new();
        config.set_accessed_date(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        HarvardFormatter::with_config(config)
    }

    fn book_input() -> ReferenceInput {
        ReferenceInput::new()
            .with("authors", vec!["John Smith"])
            .with("year", "2020")
            .with("title", "Design Patterns")
            .with("place", "London")
            .with("publisher", "Pearson")
    }

    #[rstest]
    #[case(None, "Smith, J. (2020) Design Patterns. London: Pearson.")]
    #[case(Some("1"), "Smith, J. (2020) Design Patterns. London: Pearson.")]
    #[case(Some(""), "Smith, J. (2020) Design Patterns. London: Pearson.")]
    #[case(Some("3"), "Smith, J. (2020) Design Patterns. 3 edn. London: Pearson.")]
    fn test_book_edition(#[case] edition: Option<&str>, #[case] expected: &str) {
        let mut input = book_input();
        if let Some(edition) = edition {
            input.insert("edition", edition);
        }
        let reference = formatter().format(SourceType::Book, &input);
        assert_eq!(reference.text(), expected);
        assert_eq!(reference.text().contains("edn."), expected.contains("edn."));
    }

    #[test]
    fn test_book_missing_year() {
        let mut input = book_input();
        input.insert("year", "");
        let reference = formatter().format(SourceType::Book, &input);
        assert_eq!(
            reference.text(),
            "Smith, J. (n.d.) Design Patterns. London: Pearson."
        );
    }

    #[test]
    fn test_book_three_authors() {
        let mut input = book_input();
        input.insert("authors", vec!["Erich Gamma", "Richard Helm", "Ralph Johnson"]);
        let reference = formatter().format(SourceType::Book, &input);
        assert_eq!(
            reference.text(),
            "Gamma, E., Helm, R. and Johnson, R. (2020) Design Patterns. London: Pearson."
        );
    }

    #[test]
    fn test_book_comma_string_authors() {
        let mut input = book_input();
        input.insert("authors", "Erich Gamma, Richard Helm, Ralph Johnson");
        let reference = formatter().format(SourceType::Book, &input);
        assert_eq!(
            reference.text(),
            "Gamma, E. et al. (2020) Design Patterns. London: Pearson."
        );
    }

    #[rstest]
    #[case(Some("4"), "Doe, J. (2020) 'Spans', Text, 12(4), pp. 100-110.")]
    #[case(None, "Doe, J. (2020) 'Spans', Text, 12, pp. 100-110.")]
    fn test_journal_volume_issue(#[case] issue: Option<&str>, #[case] expected: &str) {
        let mut input = ReferenceInput::new()
            .with("authors", vec!["Jane Doe"])
            .with("year", "2020")
            .with("title", "Spans")
            .with("journal", "Text")
            .with("volume", "12")
            .with("pages", "100-110");
        if let Some(issue) = issue {
            input.insert("issue", issue);
        }
        assert_eq!(formatter().format(SourceType::Journal, &input).text(), expected);
    }

    #[test]
    fn test_journal_curly_quotes() {
        let mut formatter = formatter();
        formatter.config_mut().set_quote_style(QuoteStyle::Curly);
        let input = ReferenceInput::new()
            .with("authors", vec!["Jane Doe"])
            .with("year", "2020")
            .with("title", "Spans")
            .with("journal", "Text")
            .with("volume", "12")
            .with("issue", "4")
            .with("pages", "1-2");
        assert_eq!(
            formatter.format(SourceType::Journal, &input).text(),
            "Doe, J. (2020) \u{2018}Spans\u{2019}, Text, 12(4), pp. 1-2."
        );
    }

    #[test]
    fn test_website_accessed_default() {
        let input = ReferenceInput::new()
            .with("authors", vec!["Tim Berners-Lee"])
            .with("year", "1998")
            .with("title", "Cool URIs don't change")
            .with("website_name", "W3C")
            .with("url", "https://www.w3.org/Provider/Style/URI");
        assert_eq!(
            formatter().format(SourceType::Website, &input).text(),
            "Berners-Lee, T. (1998) Cool URIs don't change. W3C. \
             Available at: https://www.w3.org/Provider/Style/URI (Accessed: 14 October 2026)."
        );
    }

    #[test]
    fn test_website_without_authors_or_organisation() {
        let input = ReferenceInput::new()
            .with("title", "Home")
            .with("website_name", "MDN")
            .with("url", "https://developer.mozilla.org")
            .with("accessed", "02 March 2024");
        assert_eq!(
            formatter().format(SourceType::Website, &input).text(),
            "MDN (n.d.) Home. MDN. Available at: https://developer.mozilla.org (Accessed: 02 March 2024)."
        );
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let reference = formatter().format(SourceType::Book, &ReferenceInput::new());
        assert_eq!(reference.text(), "(n.d.) . : .");
        assert!(!reference.text().contains(".."));
    }

    #[test]
    fn test_format_tagged() {
        let formatter = formatter();
        assert!(formatter.format_tagged("Book", &book_input()).is_ok());
        assert_eq!(
            formatter.format_tagged("report", &book_input()),
            Err(FormatError::UnknownSourceType {
                tag: "report".to_string()
            })
        );
    }

    #[test]
    fn test_assemble_keeps_raw_fragments() {
        let mut input = book_input();
        input.insert("title", "Design Patterns.");
        let assembly = formatter().assemble(SourceType::Book, &input);
        assert!(assembly.text().contains("Design Patterns.."));
    }

    #[rstest]
    #[case(vec!["Plato"], "Plato (2020) Design Patterns. London: Pearson.")]
    #[case(vec!["Plato", "John Smith"], "Plato and Smith, J. (2020) Design Patterns. London: Pearson.")]
    fn test_single_token_author(#[case] authors: Vec<&str>, #[case] expected: &str) {
        let mut input = book_input();
        input.insert("authors", authors);
        assert_eq!(formatter().format(SourceType::Book, &input).text(), expected);
    }

    #[test]
    fn test_title_with_leading_period_keeps_span() {
        let mut input = book_input();
        input.insert("title", ".NET Patterns");
        let reference = formatter().format(SourceType::Book, &input);
        assert_eq!(
            reference.text(),
            "Smith, J. (2020) .NET Patterns. London: Pearson."
        );
        assert_eq!(reference.emphasized().collect::<Vec<_>>(), vec![".NET Patterns"]);
    }

    #[test]
    fn test_doubled_period_in_url_collapses() {
        let input = ReferenceInput::new()
            .with("organisation", "Example")
            .with("year", "2024")
            .with("title", "Notes")
            .with("website_name", "Example")
            .with("url", "https://example.com/a..b")
            .with("accessed", "01 May 2024");
        let reference = formatter().format(SourceType::Website, &input);
        assert_eq!(
            reference.text(),
            "Example (2024) Notes. Example. Available at: https://example.com/a.b (Accessed: 01 May 2024)."
        );
        assert!(!reference.text().contains(".."));
    }

    #[test]
    fn test_formatter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HarvardFormatter>();
    }
}
