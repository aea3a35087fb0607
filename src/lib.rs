//! # varsta
//!
//! Birth-date mention extraction for Romanian text.
//!
//! Given one sentence and the token stream of an external named-entity
//! tagger, `varsta` finds the calendar-date mention (if any) that states a
//! date of birth, by correlating date spans with nearby trigger phrases
//! ("a implinit", "s-a nascut la data de", "la varsta de") and with person
//! mentions.
//!
//! # Pipeline
//!
//! ```text
//! text ──► Tagger (external) ──► TaggedToken ──► Group Builder ──┐
//!   │                                                            ├─► Linker ─► Option<Span>
//!   └──► Lexical Analyzer ──► LemmaToken ──► Trigger Matcher ────┘
//! ```
//!
//! - The **tagger** is consumed as a black box behind the [`Tagger`] trait;
//!   it assigns entity labels (PERSON, DATETIME) and part-of-speech tags.
//! - The **lexical analyzer** independently re-tokenizes the text into
//!   lemma-normalized, diacritic-folded tokens.
//! - The **group builder** coalesces adjacent date mentions and records, for
//!   every person mention, where the next semantic token starts.
//! - The **trigger matcher** scans the lemma stream against a declarative
//!   rule table of age/birth phrases.
//! - The **linker** returns the first date group a trigger or person
//!   mention points at; the result is always zero or one span.
//!
//! # Quick Start
//!
//! ```rust
//! use varsta::{BirthDateExtractor, EntityLabel, MockTagger, TaggedToken};
//!
//! let text = "Maria s-a nascut pe 5 martie 2020";
//! let outside = EntityLabel::from_label("O");
//! let tagger = MockTagger::new().with_tokens(vec![
//!     TaggedToken::new("Maria", 0, 5, EntityLabel::Person, "PROPN"),
//!     TaggedToken::new("s-a", 6, 9, outside.clone(), "PRON"),
//!     TaggedToken::new("nascut", 10, 16, outside.clone(), "VERB"),
//!     TaggedToken::new("pe", 17, 19, outside, "ADP"),
//!     TaggedToken::new("5", 20, 21, EntityLabel::Datetime, "NUM"),
//!     TaggedToken::new("martie", 22, 28, EntityLabel::Datetime, "NOUN").continuation(),
//!     TaggedToken::new("2020", 29, 33, EntityLabel::Datetime, "NUM").continuation(),
//! ]);
//!
//! let extractor = BirthDateExtractor::new(tagger);
//! let span = extractor.extract(text).unwrap().expect("a birth date");
//! assert_eq!((span.start, span.end), (20, 32));
//! assert_eq!(span.extract(text), "5 martie 2020");
//! ```
//!
//! Offsets everywhere are 0-based character positions; the tagger's ends are
//! exclusive, all other ends are inclusive.
//!
//! # Concurrency
//!
//! Extraction is synchronous and deterministic: all per-request state is
//! local, and the only process-wide state is a set of read-only lexical
//! tables. [`Tagger`] implementations must be `Send + Sync`; their own
//! thread-safety contract governs shared model resources.

#![warn(missing_docs)]

pub mod error;
pub mod extractor;
pub mod groups;
pub mod lexer;
pub mod lexicon;
pub mod linker;
pub mod token;
pub mod triggers;

pub use error::{Error, Result};
pub use extractor::BirthDateExtractor;
pub use groups::{build_groups, Groups, SpanGroup};
pub use token::{EntityLabel, LemmaToken, Span, TaggedToken};
pub use triggers::{match_triggers, Trigger};

/// Trait for named-entity tagger backends.
///
/// The tagger turns raw text into an ordered token stream with entity
/// labels and part-of-speech tags. It is an external collaborator: this
/// crate never trains, configures, or retries it, and tagger failures
/// surface to the caller unmasked.
pub trait Tagger: Send + Sync {
    /// Tag `text`, returning tokens in document order.
    ///
    /// Offsets are 0-based character positions into `text`; `end` is
    /// exclusive as tagger models conventionally produce it.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;

    /// Get the tagger name/identifier.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

/// A mock tagger for testing and for driving the pipeline with pre-computed
/// token streams.
///
/// # Example
///
/// ```rust
/// use varsta::{EntityLabel, MockTagger, TaggedToken, Tagger};
///
/// let tagger = MockTagger::new().with_tokens(vec![
///     TaggedToken::new("2020", 0, 4, EntityLabel::Datetime, "NUM"),
/// ]);
/// assert_eq!(tagger.tag("2020").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    tokens: Vec<TaggedToken>,
}

impl MockTagger {
    /// Create a mock tagger that returns no tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokens to return on every call.
    #[must_use]
    pub fn with_tokens(mut self, tokens: Vec<TaggedToken>) -> Self {
        self.tokens = tokens;
        self
    }
}

impl Tagger for MockTagger {
    fn tag(&self, _text: &str) -> Result<Vec<TaggedToken>> {
        Ok(self.tokens.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use varsta::prelude::*;
    //!
    //! let extractor = BirthDateExtractor::new(MockTagger::new());
    //! assert_eq!(extractor.extract("").unwrap(), None);
    //! ```
    pub use crate::error::{Error, Result};
    pub use crate::extractor::BirthDateExtractor;
    pub use crate::groups::{Groups, SpanGroup};
    pub use crate::token::{EntityLabel, LemmaToken, Span, TaggedToken};
    pub use crate::triggers::Trigger;
    pub use crate::{MockTagger, Tagger};
}
