//! Category extractors.
//!
//! Each category scans the document line by line with its own per-line match
//! policy. The policies differ on purpose and are part of the output
//! contract.

use super::scoring;
use crate::model::{Category, LegalDomain, LegalElement};
use crate::patterns::category_patterns;

/// How many elements a category may emit from a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Every pattern is tried; each matching pattern contributes its first hit.
    EachPattern,
    /// Patterns are tried in catalog order; the first that matches is the
    /// only element for the line.
    FirstPatternWins,
}

impl MatchPolicy {
    pub fn for_category(category: Category) -> MatchPolicy {
        match category {
            Category::Structure | Category::Flow => MatchPolicy::EachPattern,
            Category::Decision | Category::Impact => MatchPolicy::FirstPatternWins,
        }
    }
}

/// Run one category extractor over the document's lines.
///
/// `domain` is the document-level domain, already determined by the caller.
pub fn extract_category(
    category: Category,
    source_id: &str,
    lines: &[&str],
    domain: LegalDomain,
) -> Vec<LegalElement> {
    let patterns = category_patterns(category);
    let policy = MatchPolicy::for_category(category);
    let mut elements = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let mut line_score = None;

        for pattern in patterns {
            let Some(m) = pattern.regex.find(line) else {
                continue;
            };
            let score = *line_score.get_or_insert_with(|| scoring::score(category, line));
            elements.push(LegalElement::new(
                source_id,
                category,
                idx + 1,
                m.as_str(),
                line,
                score,
                domain,
            ));
            if policy == MatchPolicy::FirstPatternWins {
                break;
            }
        }
    }

    elements
}

pub fn extract_structure(source_id: &str, lines: &[&str], domain: LegalDomain) -> Vec<LegalElement> {
    extract_category(Category::Structure, source_id, lines, domain)
}

pub fn extract_flow(source_id: &str, lines: &[&str], domain: LegalDomain) -> Vec<LegalElement> {
    extract_category(Category::Flow, source_id, lines, domain)
}

pub fn extract_decision(source_id: &str, lines: &[&str], domain: LegalDomain) -> Vec<LegalElement> {
    extract_category(Category::Decision, source_id, lines, domain)
}

pub fn extract_impact(source_id: &str, lines: &[&str], domain: LegalDomain) -> Vec<LegalElement> {
    extract_category(Category::Impact, source_id, lines, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: LegalDomain = LegalDomain::Civil;

    #[test]
    fn test_structure_each_pattern_contributes() {
        let lines = ["1. Section 4 and § 12 apply"];
        let els = extract_structure("doc", &lines, D);
        let matched: Vec<&str> = els.iter().map(|e| e.matched_text.as_str()).collect();
        assert_eq!(matched, vec!["Section 4", "§ 12", "1. Section 4 and § 12 apply"]);
        assert!(els.iter().all(|e| e.complexity_score == 3));
    }

    #[test]
    fn test_structure_uses_first_match_of_each_pattern() {
        let lines = ["Article 1 refers to Article 2"];
        let els = extract_structure("doc", &lines, D);
        assert_eq!(els.len(), 1);
        assert_eq!(els[0].matched_text, "Article 1");
    }

    #[test]
    fn test_flow_one_element_per_pattern() {
        let lines = ["Parties shall file and must pay; the filing procedure, within 10 days"];
        let els = extract_flow("doc", &lines, D);
        let matched: Vec<&str> = els.iter().map(|e| e.matched_text.as_str()).collect();
        assert_eq!(matched, vec!["shall file", "procedure", "filing", "within 10 days"]);
    }

    #[test]
    fn test_flow_pattern_order_not_position_order() {
        // the filing appears before the procedure, but procedure is pattern 2
        let lines = ["filing procedure"];
        let els = extract_flow("doc", &lines, D);
        let matched: Vec<&str> = els.iter().map(|e| e.matched_text.as_str()).collect();
        assert_eq!(matched, vec!["procedure", "filing"]);
    }

    #[test]
    fn test_decision_first_pattern_wins() {
        let lines = ["The court finds the defendant guilty"];
        let els = extract_decision("doc", &lines, D);
        assert_eq!(els.len(), 1);
        assert_eq!(els[0].matched_text, "court finds");
    }

    #[test]
    fn test_decision_conditional_is_greedy() {
        let lines = ["If notice is given then the tenant shall leave"];
        let els = extract_decision("doc", &lines, D);
        assert_eq!(els.len(), 1);
        assert_eq!(els[0].matched_text, "If notice is given then the tenant shall");
    }

    #[test]
    fn test_impact_first_pattern_wins() {
        let lines = ["damages and a penalty and an injunction"];
        let els = extract_impact("doc", &lines, D);
        assert_eq!(els.len(), 1);
        // penalty pattern is listed before damages
        assert_eq!(els[0].matched_text, "penalty");
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let lines = ["", "no match here", "a fine of $100"];
        let els = extract_impact("doc", &lines, D);
        assert_eq!(els.len(), 1);
        assert_eq!(els[0].line_start, 3);
        assert_eq!(els[0].line_end, 3);
        assert_eq!(els[0].complexity_score, 6);
        assert_eq!(els[0].legal_domain, D);
    }

    #[test]
    fn test_policy_per_category() {
        assert_eq!(MatchPolicy::for_category(Category::Structure), MatchPolicy::EachPattern);
        assert_eq!(MatchPolicy::for_category(Category::Flow), MatchPolicy::EachPattern);
        assert_eq!(MatchPolicy::for_category(Category::Decision), MatchPolicy::FirstPatternWins);
        assert_eq!(MatchPolicy::for_category(Category::Impact), MatchPolicy::FirstPatternWins);
    }
}
