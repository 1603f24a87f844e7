//! `Authors (Year) 'Title', Journal, Volume(Issue), pp. Pages.`

use super::{Assemble, Assembly};
use crate::formatter::FormatterConfig;
use crate::reference::Journal;

impl Assemble for Journal {
    fn assemble(&self, config: &FormatterConfig) -> Assembly {
        let (open, close) = config.quote_style.marks();
        let mut out = Assembly::new();
        out.plain(format!(
            "{} ({}) {open}{}{close},",
            self.authors, self.year, self.title
        ));
        out.space().emphasized(&self.journal).plain(",");
        if let Some(volume_issue) = self.volume_issue() {
            out.space().plain(format!("{volume_issue},"));
        }
        out.space().plain(format!("pp. {}.", self.pages));
        out
    }
}
