use super::case_insensitive;
use crate::model::{Category, LegalDomain};
use regex::Regex;
use std::sync::LazyLock;

/// Keywords and patterns that score a document towards one legal domain.
pub struct DomainDefinition {
    pub domain: LegalDomain,
    /// Lower-case substrings, counted case-insensitively.
    pub keywords: &'static [&'static str],
    pub patterns: Vec<Regex>,
    /// Category most associated with the domain. Informational; the category
    /// of an element always comes from the extractor that found it.
    pub symbol: Category,
}

/// Domain definitions in priority order. Earlier entries win score ties.
static DOMAIN_DEFINITIONS: LazyLock<Vec<DomainDefinition>> = LazyLock::new(|| {
    vec![
        definition(
            LegalDomain::Constitutional,
            &[
                "constitution",
                "amendment",
                "fundamental",
                "rights",
                "due process",
                "equal protection",
                "freedom",
                "liberty",
            ],
            &[
                r"\bamendment\s+([IVXLCDM]+|\d+)\b",
                r"\b(first|fifth|fourteenth)\s+amendment\b",
                r"\bbill\s+of\s+rights\b",
            ],
            Category::Structure,
        ),
        definition(
            LegalDomain::Criminal,
            &[
                "criminal",
                "crime",
                "prosecution",
                "defendant",
                "felony",
                "misdemeanor",
                "guilty",
                "imprisonment",
                "offense",
            ],
            &[
                r"\b\d+\s+U\.S\.C\.\s*§\s*\d+",
                r"\b(first|second|third)[-\s]degree\b",
                r"\bbeyond\s+(a\s+)?reasonable\s+doubt\b",
                r"\b(people|state)\s+v\.",
            ],
            Category::Impact,
        ),
        definition(
            LegalDomain::Civil,
            &[
                "plaintiff",
                "tort",
                "negligence",
                "liability",
                "damages",
                "civil",
                "injunction",
                "remedy",
            ],
            &[
                r"\bcause\s+of\s+action\b",
                r"\bpreponderance\s+of\s+(the\s+)?evidence\b",
                r"\bstatute\s+of\s+limitations\b",
            ],
            Category::Decision,
        ),
        definition(
            LegalDomain::Commercial,
            &[
                "contract",
                "agreement",
                "commercial",
                "payment",
                "warranty",
                "breach",
                "merchant",
                "invoice",
            ],
            &[
                r"\buniform\s+commercial\s+code\b",
                r"\bU\.?C\.?C\.?\s*§",
                r"\$[\d,]+",
            ],
            Category::Flow,
        ),
        definition(
            LegalDomain::Procedural,
            &[
                "motion",
                "filing",
                "appeal",
                "jurisdiction",
                "hearing",
                "discovery",
                "summons",
                "procedure",
            ],
            &[
                r"\brule\s+\d+",
                r"\bwithin\s+\d+\s+days\b",
                r"\bnotice\s+of\s+appeal\b",
            ],
            Category::Flow,
        ),
    ]
});

fn definition(
    domain: LegalDomain,
    keywords: &'static [&'static str],
    patterns: &[&str],
    symbol: Category,
) -> DomainDefinition {
    DomainDefinition {
        domain,
        keywords,
        patterns: patterns.iter().map(|p| case_insensitive(p)).collect(),
        symbol,
    }
}

/// All domain definitions, highest priority first.
pub fn domain_definitions() -> &'static [DomainDefinition] {
    &DOMAIN_DEFINITIONS
}
