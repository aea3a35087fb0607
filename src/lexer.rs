//! Lexical analysis: punctuation-stripped, lemma-normalized tokens.
//!
//! The analyzer re-tokenizes the input independently of the tagger. ASCII
//! punctuation and whitespace separate tokens; because a separator occupies
//! exactly one character position, token offsets index the original text
//! unchanged. Each token is lowercased, diacritic-folded, and normalized
//! through the lexicon's morphological table.

use crate::lexicon::{fold_diacritics, lemmatize};
use crate::token::LemmaToken;

/// Tokenize `text` into lemma-normalized tokens with character offsets.
///
/// Offsets are 0-based character positions into the original text; `end` is
/// inclusive. Empty and whitespace-only input yields no tokens.
#[must_use]
pub fn analyze(text: &str) -> Vec<LemmaToken> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut word_start = 0;

    for (char_idx, ch) in text.chars().enumerate() {
        if ch.is_whitespace() || ch.is_ascii_punctuation() {
            flush(&mut tokens, &mut word, word_start);
        } else {
            if word.is_empty() {
                word_start = char_idx;
            }
            word.push(ch);
        }
    }
    flush(&mut tokens, &mut word, word_start);

    tokens
}

fn flush(tokens: &mut Vec<LemmaToken>, word: &mut String, start: usize) {
    if word.is_empty() {
        return;
    }
    let end = start + word.chars().count() - 1;
    let folded = fold_diacritics(&word.to_lowercase());
    tokens.push(LemmaToken {
        lemma: lemmatize(&folded).to_string(),
        start,
        end,
    });
    word.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmas(text: &str) -> Vec<String> {
        analyze(text).into_iter().map(|t| t.lemma).collect()
    }

    #[test]
    fn test_basic_offsets() {
        let tokens = analyze("Ion a implinit 20");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].lemma, "ion");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
        assert_eq!(tokens[2].lemma, "implini");
        assert_eq!((tokens[2].start, tokens[2].end), (6, 13));
        assert_eq!((tokens[3].start, tokens[3].end), (15, 16));
    }

    #[test]
    fn test_punctuation_separates() {
        let tokens = analyze("s-a nascut acolo");
        assert_eq!(lemmas("s-a nascut acolo"), ["s", "a", "naste", "acolo"]);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 0));
        assert_eq!((tokens[1].start, tokens[1].end), (2, 2));
        assert_eq!((tokens[2].start, tokens[2].end), (4, 9));
        assert_eq!((tokens[3].start, tokens[3].end), (11, 15));
    }

    #[test]
    fn test_diacritics_fold_but_offsets_stay() {
        let tokens = analyze("Vârsta de 20");
        assert_eq!(tokens[0].lemma, "varsta");
        // â is one character, so the span still covers chars 0..=5
        assert_eq!((tokens[0].start, tokens[0].end), (0, 5));
        assert_eq!((tokens[1].start, tokens[1].end), (7, 8));
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(lemmas("ÎMPLINIT"), ["implini"]);
        assert_eq!(lemmas("Născut"), ["naste"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(analyze("").is_empty());
        assert!(analyze("   \t\n").is_empty());
        assert!(analyze(".,;!?").is_empty());
    }

    #[test]
    fn test_trailing_token_flushes() {
        let tokens = analyze("pe 5");
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[1].start, tokens[1].end), (3, 3));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Token spans stay within the input and strictly increase.
        #[test]
        fn spans_in_bounds_and_ordered(text in ".{0,80}") {
            let char_count = text.chars().count();
            let tokens = analyze(&text);

            let mut prev_end: Option<usize> = None;
            for token in &tokens {
                prop_assert!(token.start <= token.end);
                prop_assert!(token.end < char_count);
                if let Some(prev) = prev_end {
                    prop_assert!(token.start > prev);
                }
                prev_end = Some(token.end);
            }
        }

        /// Every emitted lemma is non-empty.
        #[test]
        fn lemmas_nonempty(text in ".{0,80}") {
            for token in analyze(&text) {
                prop_assert!(!token.lemma.is_empty());
            }
        }

        /// Re-analysis of identical input is identical.
        #[test]
        fn analysis_is_deterministic(text in ".{0,80}") {
            prop_assert_eq!(analyze(&text), analyze(&text));
        }
    }
}
