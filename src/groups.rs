//! Span grouping over the tagged token stream.
//!
//! One walk of the tagger's output produces two group lists:
//!
//! - PERSON groups, one per PERSON token, each pointing at the start of the
//!   nearest following non-punctuation token.
//! - Merged DATETIME groups: multiword date mentions are first assembled via
//!   the tagger's continuation flag, then maximal runs of date mentions with
//!   nothing non-date between them are coalesced into single spans.
//!
//! The tagger emits exclusive ends; this module converts to inclusive ends
//! before any span arithmetic and skips empty tokens.

use serde::{Deserialize, Serialize};

use crate::token::{EntityLabel, TaggedToken};

/// A contiguous span with a pointer to the next semantic token.
///
/// `next` is the start offset of the nearest following non-punctuation
/// token, or `None` at the end of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanGroup {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (inclusive).
    pub end: usize,
    /// Start offset of the next semantic token, if any.
    pub next: Option<usize>,
}

/// PERSON and merged DATETIME groups built from one tagged sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    /// One group per PERSON token.
    pub persons: Vec<SpanGroup>,
    /// Maximal runs of adjacent DATETIME mentions, in document order.
    pub datetimes: Vec<SpanGroup>,
}

/// A raw date mention before the merge pass.
struct RawDate {
    start: usize,
    end: usize,
    last_index: usize,
}

/// Build PERSON and merged DATETIME groups from the tagged token stream.
#[must_use]
pub fn build_groups(tokens: &[TaggedToken]) -> Groups {
    let mut persons = Vec::new();
    let mut raw_dates: Vec<RawDate> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(end) = token.end_inclusive() else {
            continue;
        };
        match token.label {
            EntityLabel::Datetime => {
                if token.multiword_continuation {
                    // a continuation with no open mention still starts one
                    if let Some(open) = raw_dates.last_mut() {
                        open.end = end;
                        open.last_index = i;
                        continue;
                    }
                }
                raw_dates.push(RawDate {
                    start: token.start,
                    end,
                    last_index: i,
                });
            }
            EntityLabel::Person => {
                persons.push(SpanGroup {
                    start: token.start,
                    end,
                    next: next_semantic_start(tokens, i),
                });
            }
            EntityLabel::Other(_) => {}
        }
    }

    let dated: Vec<SpanGroup> = raw_dates
        .iter()
        .map(|raw| SpanGroup {
            start: raw.start,
            end: raw.end,
            next: next_semantic_start(tokens, raw.last_index),
        })
        .collect();

    Groups {
        persons,
        datetimes: merge_adjacent(&dated),
    }
}

/// Start offset of the nearest non-punctuation token after position `i`.
fn next_semantic_start(tokens: &[TaggedToken], i: usize) -> Option<usize> {
    tokens[i + 1..].iter().find(|t| !t.is_punct()).map(|t| t.start)
}

/// Coalesce maximal runs of date groups where each group starts exactly at
/// its predecessor's `next` pointer.
///
/// Folds over the groups in order, carrying the current open run; `None`
/// marks "no open run yet", so the first group always opens a run.
fn merge_adjacent(groups: &[SpanGroup]) -> Vec<SpanGroup> {
    let mut merged = Vec::new();
    let mut open: Option<SpanGroup> = None;

    for &group in groups {
        match &mut open {
            Some(run) if run.next == Some(group.start) => {
                run.end = group.end;
                run.next = group.next;
            }
            Some(run) => {
                merged.push(*run);
                *run = group;
            }
            None => open = Some(group),
        }
    }
    merged.extend(open);

    merged
}
