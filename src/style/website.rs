//! `Author (Year) Title. Website. Available at: URL (Accessed: Date).`

use super::{Assemble, Assembly};
use crate::formatter::FormatterConfig;
use crate::reference::Website;

impl Assemble for Website {
    fn assemble(&self, _config: &FormatterConfig) -> Assembly {
        let mut out = Assembly::new();
        out.plain(format!(
            "{} ({}) {}.",
            self.author_or_organisation, self.year, self.title
        ));
        out.space().plain(format!("{}.", self.website_name));
        out.space().plain(format!(
            "Available at: {} (Accessed: {}).",
            self.url, self.accessed
        ));
        out
    }
}
