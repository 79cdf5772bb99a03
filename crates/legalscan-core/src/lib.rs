pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod patterns;
pub mod references;
pub mod report;

use classify::DomainScoreTable;
use loader::Document;
use model::{LegalDomain, LegalElement, JURISDICTION};
use references::LegalReferences;
use report::AnalysisReport;
use serde::{Deserialize, Serialize};

/// Everything produced for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub source_id: String,
    pub legal_domain: LegalDomain,
    pub jurisdiction: String,
    pub line_count: usize,
    /// Per-domain scores behind `legal_domain`.
    pub domain_scores: DomainScoreTable,
    pub elements: Vec<LegalElement>,
    pub report: AnalysisReport,
    pub references: LegalReferences,
}

/// Main API entry point: analyse in-memory text.
///
/// Pure; safe to call concurrently for different documents.
pub fn analyze_text(source_id: &str, text: &str) -> DocumentAnalysis {
    let domain_scores = classify::domain_scores(text);
    let elements = classify::extract(source_id, text);
    let report = report::aggregate(&elements);

    DocumentAnalysis {
        source_id: source_id.to_string(),
        legal_domain: domain_scores.winner(),
        jurisdiction: JURISDICTION.to_string(),
        line_count: classify::split_lines(text).len(),
        domain_scores,
        elements,
        report,
        references: references::scan(text),
    }
}

/// Analyse a document produced by the loader.
pub fn analyze_document(document: &Document) -> DocumentAnalysis {
    analyze_text(&document.source_id, &document.text)
}
