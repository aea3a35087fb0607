//! Read-only lexical resources for the Romanian birth/age vocabulary.
//!
//! The original service delegated lemmatization to a full morphological
//! pipeline, but only a closed vocabulary affects trigger matching: the six
//! trigger lemmas, their inflected forms, and a handful of function words.
//! The table below covers that vocabulary; every other word is its own
//! lemma. Everything here is initialized once into immutable statics and
//! passed by reference into the matcher logic.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Inflected form → lemma, over diacritic-folded lowercase words.
const LEMMA_FORMS: &[(&str, &[&str])] = &[
    (
        "varsta",
        &["varsta", "varstei", "varste", "varstele", "varstelor"],
    ),
    (
        "avea",
        &[
            "avea", "are", "am", "ai", "avem", "aveti", "au", "aveam", "aveai", "aveau", "avut",
            "avuta", "avand", "aiba",
        ],
    ),
    ("nastere", &["nastere", "nasterea", "nasterii", "nasteri"]),
    (
        "implini",
        &[
            "implini",
            "implinit",
            "implinita",
            "implineste",
            "implinesc",
            "implinim",
            "impliniti",
            "implinea",
            "implinise",
            "implinind",
        ],
    ),
    (
        "face",
        &[
            "face", "fac", "faci", "facem", "faceti", "facut", "facuta", "facea", "facand", "faca",
        ],
    ),
    (
        "naste",
        &[
            "naste", "nascut", "nascuta", "nascuti", "nascute", "nasc", "nastem",
        ],
    ),
    ("data", &["data", "datei"]),
];

static LEMMA_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (lemma, forms) in LEMMA_FORMS {
        for form in *forms {
            table.insert(*form, *lemma);
        }
    }
    table
});

/// Fold Romanian diacritics to their ASCII base letters.
///
/// Covers both the comma-below and legacy cedilla forms of s and t.
#[must_use]
pub fn fold_diacritics(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'ă' | 'â' => 'a',
            'Ă' | 'Â' => 'A',
            'î' => 'i',
            'Î' => 'I',
            'ș' | 'ş' => 's',
            'Ș' | 'Ş' => 'S',
            'ț' | 'ţ' => 't',
            'Ț' | 'Ţ' => 'T',
            _ => c,
        })
        .collect()
}

/// Normalize a diacritic-folded, lowercased word to its lemma.
///
/// Words outside the birth/age vocabulary are returned unchanged.
#[must_use]
pub fn lemmatize(word: &str) -> &str {
    LEMMA_TABLE.get(word).copied().unwrap_or(word)
}
