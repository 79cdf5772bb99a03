//! Static pattern catalog.
//!
//! Category patterns drive the extractors; domain definitions drive
//! document-level domain classification. Everything is compiled once on
//! first use and shared read-only across threads.

pub mod domains;

use crate::model::Category;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

pub use domains::{domain_definitions, DomainDefinition};

/// A compiled, case-insensitive category pattern.
pub struct CategoryPattern {
    pub regex: Regex,
    /// Pattern text as written, without the case-insensitivity flag.
    pub source: &'static str,
    pub description: &'static str,
}

static STRUCTURE_PATTERNS: LazyLock<Vec<CategoryPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(ARTICLE|SECTION|CHAPTER|TITLE)\s+([IVXLCDM]+|\d+)",
            "Numbered article, section, chapter or title heading",
        ),
        pattern(r"§\s*\d+", "Section sign reference"),
        pattern(r"^\d+\.\s*[A-Z][^.]*", "Numbered clause at line start"),
    ]
});

static FLOW_PATTERNS: LazyLock<Vec<CategoryPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"(shall|must|may|should)\s+\w+", "Modal obligation or permission"),
        pattern(r"(procedure|process|method|steps)", "Procedure reference"),
        pattern(r"(filing|submission|application)", "Filing or submission"),
        pattern(r"within\s+\d+\s+days", "Time limit in days"),
    ]
});

static DECISION_PATTERNS: LazyLock<Vec<CategoryPattern>> = LazyLock::new(|| {
    vec![
        pattern(
            r"(if|when|unless|provided that).*(then|shall|must)",
            "Conditional rule",
        ),
        pattern(
            r"(court\s+finds|court\s+determines|court\s+decides)",
            "Court finding",
        ),
        pattern(r"(guilty|not guilty|liable|not liable)", "Verdict"),
        pattern(r"(granted|denied|dismissed|sustained)", "Ruling on a motion"),
    ]
});

static IMPACT_PATTERNS: LazyLock<Vec<CategoryPattern>> = LazyLock::new(|| {
    vec![
        pattern(r"(penalty|fine|imprisonment|sentence)", "Penalty or sentence"),
        pattern(r"(damages|compensation|restitution)", "Monetary relief"),
        pattern(r"(injunction|restraining order)", "Injunctive relief"),
        pattern(r"(constitutional|unconstitutional)", "Constitutional consequence"),
        pattern(r"(precedent|landmark|significant)", "Precedential weight"),
    ]
});

fn pattern(source: &'static str, description: &'static str) -> CategoryPattern {
    CategoryPattern {
        regex: case_insensitive(source),
        source,
        description,
    }
}

pub(crate) fn case_insensitive(source: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .expect("invalid built-in pattern")
}

/// Patterns for a category, in catalog order.
pub fn category_patterns(category: Category) -> &'static [CategoryPattern] {
    match category {
        Category::Structure => &STRUCTURE_PATTERNS,
        Category::Flow => &FLOW_PATTERNS,
        Category::Decision => &DECISION_PATTERNS,
        Category::Impact => &IMPACT_PATTERNS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_counts() {
        assert_eq!(category_patterns(Category::Structure).len(), 3);
        assert_eq!(category_patterns(Category::Flow).len(), 4);
        assert_eq!(category_patterns(Category::Decision).len(), 4);
        assert_eq!(category_patterns(Category::Impact).len(), 5);
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let structure = category_patterns(Category::Structure);
        assert!(structure[0].regex.is_match("article IV"));
        assert!(structure[0].regex.is_match("Section 12"));
        let decision = category_patterns(Category::Decision);
        assert!(decision[1].regex.is_match("The COURT FINDS that"));
    }

    #[test]
    fn test_numbered_clause_anchored_at_line_start() {
        let numbered = &category_patterns(Category::Structure)[2];
        assert_eq!(
            numbered.regex.find("1. Scope of work. More").map(|m| m.as_str()),
            Some("1. Scope of work")
        );
        assert!(!numbered.regex.is_match("see clause 1. Scope"));
    }
}
