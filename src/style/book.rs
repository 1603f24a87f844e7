//! `Authors (Year) Title. Edition Place: Publisher.`

use super::{Assemble, Assembly};
use crate::formatter::FormatterConfig;
use crate::reference::Book;

impl Assemble for Book {
    fn assemble(&self, _config: &FormatterConfig) -> Assembly {
        let mut out = Assembly::new();
        out.plain(format!("{} ({}) ", self.authors, self.year))
            .emphasized(&self.title)
            .plain(".");
        if let Some(edition) = &self.edition {
            out.space().plain(edition);
        }
        out.space()
            .plain(format!("{}: {}.", self.place, self.publisher));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleanup::cleanup_assembly;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn book(edition: Option<&str>) -> Book {
        Book {
            authors: "Smith, J.".to_string(),
            year: "2020".to_string(),
            title: "Design Patterns".to_string(),
            edition: edition.map(String::from),
            place: "London".to_string(),
            publisher: "Pearson".to_string(),
        }
    }

    #[rstest]
    #[case(None, "Smith, J. (2020) Design Patterns. London: Pearson.")]
    #[case(Some("3 edn."), "Smith, J. (2020) Design Patterns. 3 edn. London: Pearson.")]
    fn test_book_layout(#[case] edition: Option<&str>, #[case] expected: &str) {
        let assembly = book(edition).assemble(&FormatterConfig::new());
        assert_eq!(assembly.text(), expected);
        assert!(!assembly.text().contains("  "));
    }

    #[test]
    fn test_title_is_emphasized() {
        let reference = cleanup_assembly(&book(None).assemble(&FormatterConfig::new()));
        assert_eq!(reference.emphasized().collect::<Vec<_>>(), vec!["Design Patterns"]);
    }

    #[test]
    fn test_title_ending_in_period() {
        let mut book = book(None);
        book.title = "Design Patterns.".to_string();
        let reference = cleanup_assembly(&book.assemble(&FormatterConfig::new()));
        assert_eq!(
            reference.text(),
            "Smith, J. (2020) Design Patterns. London: Pearson."
        );
        assert_eq!(reference.emphasized().collect::<Vec<_>>(), vec!["Design Patterns."]);
    }
}
