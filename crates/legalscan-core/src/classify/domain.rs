use crate::model::LegalDomain;
use crate::patterns::domain_definitions;
use serde::{Deserialize, Serialize};

/// Accumulated score for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: LegalDomain,
    pub keyword_hits: u32,
    pub pattern_hits: u32,
}

impl DomainScore {
    pub fn total(&self) -> u32 {
        self.keyword_hits + self.pattern_hits
    }
}

/// Per-document domain scores, in catalog priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScoreTable {
    pub scores: Vec<DomainScore>,
}

impl DomainScoreTable {
    /// The highest-scoring domain. Ties go to the domain listed first.
    pub fn winner(&self) -> LegalDomain {
        let mut best: Option<&DomainScore> = None;
        for score in &self.scores {
            match best {
                Some(b) if score.total() <= b.total() => {}
                _ => best = Some(score),
            }
        }
        best.map(|s| s.domain).unwrap_or(LegalDomain::General)
    }
}

/// Score a whole document against every domain definition.
pub fn domain_scores(text: &str) -> DomainScoreTable {
    let lower = text.to_lowercase();
    let scores = domain_definitions()
        .iter()
        .map(|def| {
            let keyword_hits: usize = def.keywords.iter().map(|kw| lower.matches(kw).count()).sum();
            let pattern_hits: usize = def.patterns.iter().map(|re| re.find_iter(text).count()).sum();
            DomainScore {
                domain: def.domain,
                keyword_hits: keyword_hits as u32,
                pattern_hits: pattern_hits as u32,
            }
        })
        .collect();

    let table = DomainScoreTable { scores };
    tracing::trace!(?table, "domain scores");
    table
}

/// Document-level domain. Computed once per document and shared by all of
/// its elements.
pub fn determine_domain(text: &str) -> LegalDomain {
    domain_scores(text).winner()
}
