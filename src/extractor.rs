//! End-to-end birth-date extraction.

use crate::groups::build_groups;
use crate::lexer::analyze;
use crate::linker::link;
use crate::token::Span;
use crate::triggers::match_triggers;
use crate::{Error, Result, Tagger};

/// Extracts the stated date of birth from one sentence.
///
/// Owns the external tagger; everything else is request-scoped, so a shared
/// extractor can serve concurrent requests without locking.
pub struct BirthDateExtractor<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> BirthDateExtractor<T> {
    /// Create an extractor over the given tagger.
    #[must_use]
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Access the underlying tagger.
    #[must_use]
    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Extract the birth-date mention from `text`, if any.
    ///
    /// Returns at most one span (inclusive character offsets). Input with no
    /// qualifying date yields `Ok(None)`; tagger failures and malformed
    /// tagger output surface as errors.
    pub fn extract(&self, text: &str) -> Result<Option<Span>> {
        let tagged = self.tagger.tag(text)?;
        if let Some(bad) = tagged.iter().find(|t| t.end < t.start) {
            return Err(Error::invalid_input(format!(
                "reversed token span {}..{}",
                bad.start, bad.end
            )));
        }

        let groups = build_groups(&tagged);
        if groups.datetimes.is_empty() {
            return Ok(None);
        }

        let lemmas = analyze(text);
        let triggers = match_triggers(&lemmas);

        Ok(link(&groups.datetimes, &groups.persons, &triggers)
            .map(|group| Span::new(group.start, group.end)))
    }
}
