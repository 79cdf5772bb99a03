use serde::{Deserialize, Serialize};
use std::fmt;

/// Jurisdiction attached to every element. No jurisdiction inference is done.
pub const JURISDICTION: &str = "multi";

/// The four element categories, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Structure,
    Flow,
    Decision,
    Impact,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Structure,
        Category::Flow,
        Category::Decision,
        Category::Impact,
    ];

    /// Human-readable label used in element descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Category::Structure => "Structural element",
            Category::Flow => "Procedural flow",
            Category::Decision => "Decision point",
            Category::Impact => "Legal impact",
        }
    }

    /// Display glyph. Presentation only; never used for matching.
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Structure => "📜",
            Category::Flow => "⚡",
            Category::Decision => "⚖️",
            Category::Impact => "⚠️",
        }
    }

    /// Upper bound of the complexity score for this category.
    pub fn ceiling(self) -> u32 {
        match self {
            Category::Structure => 10,
            Category::Flow => 15,
            Category::Decision => 20,
            Category::Impact => 25,
        }
    }

    pub fn element_type(self) -> ElementType {
        match self {
            Category::Structure => ElementType::Structure,
            Category::Flow => ElementType::Flow,
            Category::Decision => ElementType::Decision,
            Category::Impact => ElementType::Impact,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Structure => "STRUCTURE",
            Category::Flow => "FLOW",
            Category::Decision => "DECISION",
            Category::Impact => "IMPACT",
        };
        f.pad(name)
    }
}

/// Lower-case mirror of [`Category`], kept as its own field on serialised elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Structure,
    Flow,
    Decision,
    Impact,
}

/// Legal domain of a document. The first five variants are listed in
/// classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalDomain {
    Constitutional,
    Criminal,
    Civil,
    Commercial,
    Procedural,
    /// Label for stored results whose domain is not one of the above.
    #[serde(other)]
    General,
}

impl LegalDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            LegalDomain::Constitutional => "constitutional",
            LegalDomain::Criminal => "criminal",
            LegalDomain::Civil => "civil",
            LegalDomain::Commercial => "commercial",
            LegalDomain::Procedural => "procedural",
            LegalDomain::General => "general",
        }
    }
}

impl fmt::Display for LegalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One detected match. Created by the category extractors and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalElement {
    /// Identifier of the originating document.
    pub source_id: String,
    /// Exact substring matched by the triggering pattern.
    pub matched_text: String,
    pub category_symbol: Category,
    /// 1-based line number.
    pub line_start: usize,
    /// Always equal to `line_start`.
    pub line_end: usize,
    /// Scored over the whole line, bounded by the category ceiling.
    pub complexity_score: u32,
    pub description: String,
    /// The trimmed source line containing the match.
    pub content_snippet: String,
    pub element_type: ElementType,
    /// Document-level domain, identical for every element of a document.
    pub legal_domain: LegalDomain,
    pub jurisdiction: String,
}

impl LegalElement {
    pub(crate) fn new(
        source_id: &str,
        category: Category,
        line_number: usize,
        matched_text: &str,
        line: &str,
        complexity_score: u32,
        legal_domain: LegalDomain,
    ) -> Self {
        LegalElement {
            source_id: source_id.to_string(),
            matched_text: matched_text.to_string(),
            category_symbol: category,
            line_start: line_number,
            line_end: line_number,
            complexity_score,
            description: format!("{}: {}", category.label(), matched_text),
            content_snippet: line.trim().to_string(),
            element_type: category.element_type(),
            legal_domain,
            jurisdiction: JURISDICTION.to_string(),
        }
    }
}
