//! Configuration options for the Harvard formatter.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Quote marks placed around journal article titles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'Title'`
    #[default]
    Straight,
    /// `‘Title’`
    Curly,
}

impl QuoteStyle {
    /// Opening and closing marks.
    pub fn marks(&self) -> (char, char) {
        match self {
            QuoteStyle::Straight => ('\'', '\''),
            QuoteStyle::Curly => ('\u{2018}', '\u{2019}'),
        }
    }
}

/// Configuration for a [`HarvardFormatter`](super::HarvardFormatter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Date used when a website has no `accessed` value. `None` reads the
    /// local clock on every call.
    pub accessed_date: Option<NaiveDate>,
    /// Quote marks around journal article titles.
    pub quote_style: QuoteStyle,
}

impl FormatterConfig {
    /// Creates a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the fallback accessed date
    pub fn set_accessed_date(&mut self, date: NaiveDate) -> &mut Self {
        self.accessed_date = Some(date);
        self
    }

    /// Returns the fallback accessed date to the local clock
    pub fn clear_accessed_date(&mut self) -> &mut Self {
        self.accessed_date = None;
        self
    }

    /// Sets the quote marks used around journal article titles
    pub fn set_quote_style(&mut self, quote_style: QuoteStyle) -> &mut Self {
        self.quote_style = quote_style;
        self
    }

    /// The date to use for a missing `accessed` value.
    pub(crate) fn today(&self) -> NaiveDate {
        self.accessed_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_new() {
        let config = FormatterConfig::new();
        assert_eq!(config.accessed_date, None);
        assert_eq!(config.quote_style, QuoteStyle::Straight);
    }

    #[test]
    fn test_configuration_chaining() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let mut config = FormatterConfig::new();
        config
            .set_accessed_date(date)
            .set_quote_style(QuoteStyle::Curly);

        assert_eq!(config.accessed_date, Some(date));
        assert_eq!(config.today(), date);
        assert_eq!(config.quote_style, QuoteStyle::Curly);

        config.clear_accessed_date();
        assert_eq!(config.accessed_date, None);
    }

    #[test]
    fn test_quote_marks() {
        assert_eq!(QuoteStyle::Straight.marks(), ('\'', '\''));
        assert_eq!(QuoteStyle::Curly.marks(), ('‘', '’'));
    }
}
