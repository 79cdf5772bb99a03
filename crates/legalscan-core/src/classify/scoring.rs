//! Per-category complexity scores.
//!
//! Every scorer takes the whole source line, not just the matched text, so
//! all elements found on one line of the same category share a score.

use crate::model::Category;
use crate::patterns::case_insensitive;
use regex::Regex;
use std::sync::LazyLock;

static TITLE_TIER: LazyLock<Regex> = LazyLock::new(|| case_insensitive(r"\b(TITLE|CHAPTER)\b"));
static ARTICLE_TIER: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\b(ARTICLE|SECTION)\b"));
static NUMBERED_TIER: LazyLock<Regex> = LazyLock::new(|| case_insensitive(r"§|\d+\."));

static MODAL_VERB: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\b(shall|must|may|should|will)\b"));
static TIME_CONSTRAINT: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\d+\s+(day|week|month|year)s?"));

static CONDITIONAL: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\b(if|when|unless|provided|except)\b"));
static CONNECTIVE: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\b(and|or|but|however|nevertheless)\b"));

static SEVERITY: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\b(severe|significant|major|critical|substantial)\b"));
static MONETARY: LazyLock<Regex> =
    LazyLock::new(|| case_insensitive(r"\$[\d,]+|\b\d[\d,]*\s+dollars\b"));

fn count(re: &Regex, line: &str) -> u32 {
    re.find_iter(line).count() as u32
}

/// Score a line for the given category.
pub fn score(category: Category, line: &str) -> u32 {
    match category {
        Category::Structure => structure_score(line),
        Category::Flow => flow_score(line),
        Category::Decision => decision_score(line),
        Category::Impact => impact_score(line),
    }
}

/// Base 1 plus the single highest heading tier present.
pub fn structure_score(line: &str) -> u32 {
    let tier = if TITLE_TIER.is_match(line) {
        3
    } else if ARTICLE_TIER.is_match(line) {
        2
    } else if NUMBERED_TIER.is_match(line) {
        1
    } else {
        0
    };
    (1 + tier).min(Category::Structure.ceiling())
}

pub fn flow_score(line: &str) -> u32 {
    let raw = 1 + count(&MODAL_VERB, line) + 2 * count(&TIME_CONSTRAINT, line);
    raw.min(Category::Flow.ceiling())
}

pub fn decision_score(line: &str) -> u32 {
    let raw = 2 + 2 * count(&CONDITIONAL, line) + count(&CONNECTIVE, line);
    raw.min(Category::Decision.ceiling())
}

pub fn impact_score(line: &str) -> u32 {
    let raw = 3 + 2 * count(&SEVERITY, line) + 3 * count(&MONETARY, line);
    raw.min(Category::Impact.ceiling())
}
