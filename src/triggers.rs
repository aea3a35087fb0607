//! Trigger phrase matching over the lemma token stream.
//!
//! A trigger is a lemma pattern that linguistically signals an age or birth
//! statement ("a implinit", "s-a nascut la data de", "varsta de"). Each rule
//! pairs a set of anchor lemmas with a follow pattern: a pure function over
//! a bounded token window that decides how far the matched phrase extends
//! and where the associated date is expected to begin.
//!
//! | Anchor lemma | Follow pattern | `next` anchor |
//! |---|---|---|
//! | `varsta` | optional `de` | past the matched phrase |
//! | `avea` `nastere` `implini` `face` | none | token after the anchor |
//! | `naste` | optional `pe`/`la`/`in`, then optional `data` `de` | past the longest matched chain |
//!
//! Matching is lemma-exact over lowercased, diacritic-folded input: one
//! linear pass, each position matches at most one rule, no backtracking. A
//! rule whose `next` anchor would fall past the end of the sequence emits
//! nothing.

use serde::{Deserialize, Serialize};

use crate::token::LemmaToken;

/// A matched trigger phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Start offset of the matched phrase (inclusive).
    pub start: usize,
    /// End offset of the matched phrase (inclusive).
    pub end: usize,
    /// Offset where the associated date is expected to begin.
    pub next: usize,
}

/// A follow pattern over the token window after an anchor at `idx`.
///
/// Returns the index of the last phrase token and the index of the `next`
/// anchor token, or `None` when the window is too short.
type Follow = fn(&[LemmaToken], usize) -> Option<(usize, usize)>;

struct TriggerRule {
    lemmas: &'static [&'static str],
    follow: Follow,
}

const TRIGGER_RULES: &[TriggerRule] = &[
    TriggerRule {
        lemmas: &["varsta"],
        follow: follow_optional_de,
    },
    TriggerRule {
        lemmas: &["avea", "nastere", "implini", "face"],
        follow: follow_none,
    },
    TriggerRule {
        lemmas: &["naste"],
        follow: follow_born_chain,
    },
];

/// The date is expected immediately after the anchor.
fn follow_none(tokens: &[LemmaToken], idx: usize) -> Option<(usize, usize)> {
    anchored(tokens, idx, idx + 1)
}

/// Optional `de` joins the phrase; the date is expected past it.
fn follow_optional_de(tokens: &[LemmaToken], idx: usize) -> Option<(usize, usize)> {
    if lemma_at(tokens, idx + 1) == Some("de") {
        anchored(tokens, idx + 1, idx + 2)
    } else {
        anchored(tokens, idx, idx + 1)
    }
}

/// Optional preposition, then optional `data de`; the longest in-bounds
/// chain wins, falling back to the shorter one when the tail is missing.
fn follow_born_chain(tokens: &[LemmaToken], idx: usize) -> Option<(usize, usize)> {
    if matches!(lemma_at(tokens, idx + 1), Some("pe" | "la" | "in")) {
        if lemma_at(tokens, idx + 2) == Some("data") {
            if lemma_at(tokens, idx + 3) == Some("de") {
                anchored(tokens, idx + 3, idx + 4)
            } else {
                anchored(tokens, idx + 2, idx + 3)
            }
        } else {
            anchored(tokens, idx + 1, idx + 2)
        }
    } else {
        anchored(tokens, idx, idx + 1)
    }
}

fn lemma_at(tokens: &[LemmaToken], idx: usize) -> Option<&str> {
    tokens.get(idx).map(|t| t.lemma.as_str())
}

/// Emit `(last, next)` only when the `next` anchor token exists.
fn anchored(tokens: &[LemmaToken], last: usize, next: usize) -> Option<(usize, usize)> {
    (next < tokens.len()).then_some((last, next))
}

/// Scan the lemma sequence for trigger phrases.
#[must_use]
pub fn match_triggers(tokens: &[LemmaToken]) -> Vec<Trigger> {
    let mut triggers = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        let Some(rule) = TRIGGER_RULES
            .iter()
            .find(|rule| rule.lemmas.contains(&token.lemma.as_str()))
        else {
            continue;
        };
        if let Some((last, next)) = (rule.follow)(tokens, idx) {
            triggers.push(Trigger {
                start: token.start,
                end: tokens[last].end,
                next: tokens[next].start,
            });
        }
    }

    triggers
}
