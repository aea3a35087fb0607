//! Token and span types shared across the pipeline.
//!
//! Two token sequences flow through an extraction, and they are never
//! interchangeable:
//!
//! - [`TaggedToken`]: produced by the external tagger, one per word, with an
//!   entity label and part-of-speech. Ends are exclusive as the tagger emits
//!   them; the group builder converts to inclusive ends before any span
//!   arithmetic.
//! - [`LemmaToken`]: produced by the crate's own lexical analyzer, with
//!   lemma-normalized text and inclusive ends.
//!
//! All offsets are 0-based character positions into the original text.

use serde::{Deserialize, Serialize};

/// Entity label classification from the tagger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    /// Person name (PERSON)
    Person,
    /// Date or time expression (DATETIME)
    Datetime,
    /// Any other label, including "O" for non-entities
    Other(String),
}

impl EntityLabel {
    /// Convert to the tagger's label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Datetime => "DATETIME",
            EntityLabel::Other(s) => s.as_str(),
        }
    }

    /// Parse from a tagger label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "PERSON" | "PER" | "B-PER" | "I-PER" => EntityLabel::Person,
            "DATETIME" | "DATE" | "TIME" | "B-DATETIME" | "I-DATETIME" => EntityLabel::Datetime,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

impl From<String> for EntityLabel {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_label().to_string()
    }
}

/// One token from the external tagger.
///
/// Serializes with the tagger adapter's wire field names
/// (`text`, `start`, `end`, `label`, `pos`, `multi`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text of the token.
    pub text: String,
    /// Start offset (character position, inclusive).
    pub start: usize,
    /// End offset (character position, exclusive).
    pub end: usize,
    /// Entity label assigned by the tagger.
    pub label: EntityLabel,
    /// Universal POS tag (`PUNCT` is the only value the core inspects).
    #[serde(rename = "pos")]
    pub upos: String,
    /// True when this token continues the previous token's entity.
    #[serde(rename = "multi", default)]
    pub multiword_continuation: bool,
}

impl TaggedToken {
    /// Create a tagged token.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        label: EntityLabel,
        upos: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            label,
            upos: upos.into(),
            multiword_continuation: false,
        }
    }

    /// Mark this token as continuing the previous token's entity.
    #[must_use]
    pub fn continuation(mut self) -> Self {
        self.multiword_continuation = true;
        self
    }

    /// Whether the tagger labeled this token as punctuation.
    #[must_use]
    pub fn is_punct(&self) -> bool {
        self.upos == "PUNCT"
    }

    /// Inclusive end offset, or `None` for an empty token.
    #[must_use]
    pub fn end_inclusive(&self) -> Option<usize> {
        (self.end > self.start).then(|| self.end - 1)
    }
}

/// One token from the lexical analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmaToken {
    /// Lowercased, diacritic-folded, lemma-normalized form.
    pub lemma: String,
    /// Start offset (character position, inclusive).
    pub start: usize,
    /// End offset (character position, inclusive).
    pub end: usize,
}

/// A detected mention span, the public result type.
///
/// Offsets are 0-based character positions; `end` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (inclusive).
    pub end: usize,
}

impl Span {
    /// Create a span from inclusive character offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn char_len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    /// Extract the substring this span covers.
    ///
    /// Returns an empty string when the span falls outside `text`.
    #[must_use]
    pub fn extract<'a>(&self, text: &'a str) -> &'a str {
        let byte_at = |char_idx: usize| text.char_indices().nth(char_idx).map(|(b, _)| b);
        let Some(byte_start) = byte_at(self.start) else {
            return "";
        };
        let byte_end = byte_at(self.end + 1).unwrap_or(text.len());
        text.get(byte_start..byte_end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for label in [
            EntityLabel::Person,
            EntityLabel::Datetime,
            EntityLabel::Other("LOC".to_string()),
        ] {
            let parsed = EntityLabel::from_label(label.as_label());
            assert_eq!(label, parsed);
        }
    }

    #[test]
    fn test_label_aliases() {
        assert_eq!(EntityLabel::from_label("per"), EntityLabel::Person);
        assert_eq!(EntityLabel::from_label("B-PER"), EntityLabel::Person);
        assert_eq!(EntityLabel::from_label("DATE"), EntityLabel::Datetime);
        assert_eq!(
            EntityLabel::from_label("o"),
            EntityLabel::Other("O".to_string())
        );
    }

    #[test]
    fn test_tagged_token_wire_format() {
        let json = r#"{"text":"martie","start":22,"end":28,"label":"DATETIME","pos":"NOUN","multi":true}"#;
        let token: TaggedToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.label, EntityLabel::Datetime);
        assert!(token.multiword_continuation);
        assert_eq!(token.end_inclusive(), Some(27));

        let back = serde_json::to_string(&token).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_multi_defaults_to_false() {
        let json = r#"{"text":"Ion","start":0,"end":3,"label":"PERSON","pos":"PROPN"}"#;
        let token: TaggedToken = serde_json::from_str(json).unwrap();
        assert!(!token.multiword_continuation);
    }

    #[test]
    fn test_empty_token_has_no_inclusive_end() {
        let token = TaggedToken::new("", 5, 5, EntityLabel::Other("O".to_string()), "X");
        assert_eq!(token.end_inclusive(), None);
    }

    #[test]
    fn test_span_extract() {
        let text = "Vârsta de 20 de ani";
        // "Vârsta" is chars 0..=5 even though â is 2 bytes
        assert_eq!(Span::new(0, 5).extract(text), "Vârsta");
        assert_eq!(Span::new(10, 11).extract(text), "20");
        assert_eq!(Span::new(10, 11).char_len(), 2);
    }

    #[test]
    fn test_span_extract_out_of_bounds() {
        assert_eq!(Span::new(10, 20).extract("scurt"), "");
    }
}
