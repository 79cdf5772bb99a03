//! Citation and key-phrase scan over the whole document text.

use crate::patterns::case_insensitive;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SECTION_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"§\s*\d+(\.\d+)*").expect("section pattern"));
static ARTICLE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Article\s+[IVXLCDM]+\b|\bArt\.\s*\d+").expect("article pattern"));
static CASE_CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s+\w+\s+\d+").expect("citation pattern"));
static STATUTE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s+U\.S\.C\.\s*§\s*\d+").expect("statute pattern"));
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern"));

const KEY_PHRASES: &[&str] = &[
    "in accordance with",
    "subject to the provisions of",
    "for the purposes of",
    "shall be deemed to",
    "without prejudice to",
];

static KEY_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = KEY_PHRASES
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    case_insensitive(&alternation)
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Length in characters.
    pub length: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Legal references found in a document, each list in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReferences {
    pub section_refs: Vec<String>,
    pub article_refs: Vec<String>,
    pub case_citations: Vec<String>,
    pub statute_refs: Vec<String>,
    /// Recognised phrases, lower-cased, first occurrence order, no repeats.
    pub key_phrases: Vec<String>,
    pub stats: TextStats,
}

fn all_matches(re: &Regex, text: &str) -> Vec<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

pub fn scan(text: &str) -> LegalReferences {
    let mut key_phrases: Vec<String> = Vec::new();
    for m in KEY_PHRASE.find_iter(text) {
        let phrase = m.as_str().to_lowercase();
        if !key_phrases.contains(&phrase) {
            key_phrases.push(phrase);
        }
    }

    LegalReferences {
        section_refs: all_matches(&SECTION_REF, text),
        article_refs: all_matches(&ARTICLE_REF, text),
        case_citations: all_matches(&CASE_CITATION, text),
        statute_refs: all_matches(&STATUTE_REF, text),
        key_phrases,
        stats: TextStats {
            length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            sentence_count: SENTENCE_BREAK
                .split(text)
                .filter(|s| !s.trim().is_empty())
                .count(),
        },
    }
}
