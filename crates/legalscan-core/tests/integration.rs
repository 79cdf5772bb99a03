//! End-to-end tests for analyze_text() and the batch pipeline.
//!
//! Documents are built in memory or written to a temp dir, so these tests
//! need nothing from the environment.

use legalscan_core::batch::{analyze_directory, DocumentOutcome};
use legalscan_core::classify::{extract, split_lines};
use legalscan_core::config::Config;
use legalscan_core::error::ErrorKind;
use legalscan_core::model::{Category, LegalDomain};
use legalscan_core::report::{aggregate, ComplexityBucket};
use legalscan_core::{analyze_text, DocumentAnalysis};

fn of_category(analysis: &DocumentAnalysis, category: Category) -> Vec<&legalscan_core::model::LegalElement> {
    analysis
        .elements
        .iter()
        .filter(|e| e.category_symbol == category)
        .collect()
}

const AGREEMENT: &str = "\
ARTICLE I - Definitions
Section 2. Payment Terms
The buyer shall pay $5,000 within 30 days of delivery.
If payment is not made, the seller may terminate this agreement.
The court finds the defendant liable for breach of contract.
";

// ---------------------------------------------------------------------------
// Scenario A: article heading
// ---------------------------------------------------------------------------
#[test]
fn article_heading_is_one_structure_element() {
    let analysis = analyze_text("a", "ARTICLE I - Definitions");
    let structure = of_category(&analysis, Category::Structure);

    assert_eq!(structure.len(), 1);
    assert_eq!(structure[0].matched_text, "ARTICLE I");
    assert_eq!(structure[0].complexity_score, 3);
    assert_eq!(structure[0].line_start, 1);
}

// ---------------------------------------------------------------------------
// Scenario B: each flow pattern on a line yields its own element
// ---------------------------------------------------------------------------
#[test]
fn flow_line_yields_element_per_pattern() {
    let analysis = analyze_text("b", "The tenant must vacate within 30 days");
    let flow = of_category(&analysis, Category::Flow);

    assert_eq!(flow.len(), 2);
    assert!(flow.iter().all(|e| e.complexity_score == 4));
    assert!(flow.iter().all(|e| e.line_start == 1));
}

// ---------------------------------------------------------------------------
// Scenario C: first decision pattern wins
// ---------------------------------------------------------------------------
#[test]
fn decision_uses_first_matching_pattern() {
    let analysis = analyze_text("c", "The court finds the defendant guilty");
    let decision = of_category(&analysis, Category::Decision);

    assert_eq!(decision.len(), 1);
    assert_eq!(decision[0].matched_text, "court finds");
}

// ---------------------------------------------------------------------------
// Scenario D: empty input
// ---------------------------------------------------------------------------
#[test]
fn empty_text_produces_empty_report() {
    let analysis = analyze_text("d", "");

    assert!(analysis.elements.is_empty());
    assert_eq!(analysis.line_count, 0);
    assert_eq!(analysis.report.total_elements, 0);
    for category in Category::ALL {
        assert_eq!(analysis.report.count(category), 0);
    }
    for bucket in ComplexityBucket::ALL {
        assert_eq!(analysis.report.bucket_count(bucket), 0);
    }
    assert!(analysis.report.domain_distribution.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let first = analyze_text("doc", AGREEMENT);
    let second = analyze_text("doc", AGREEMENT);
    assert_eq!(first, second);
}

#[test]
fn elements_respect_bounds_and_document_domain() {
    let analysis = analyze_text("doc", AGREEMENT);
    let line_count = split_lines(AGREEMENT).len();

    assert!(!analysis.elements.is_empty());
    for el in &analysis.elements {
        assert!(el.line_start >= 1 && el.line_start <= line_count);
        assert_eq!(el.line_start, el.line_end);
        assert!(el.complexity_score <= el.category_symbol.ceiling());
        assert_eq!(el.legal_domain, analysis.legal_domain);
        assert_eq!(el.source_id, "doc");
        assert!(!el.matched_text.is_empty());
    }
}

#[test]
fn decision_and_impact_at_most_one_per_line() {
    let text = "The court finds and the court rules the defendant guilty\n\
                The penalty is a fine and imprisonment, shall be liable";
    let elements = extract("doc", text);

    for category in [Category::Decision, Category::Impact] {
        for line in 1..=2 {
            let n = elements
                .iter()
                .filter(|e| e.category_symbol == category && e.line_start == line)
                .count();
            assert!(n <= 1, "{category} line {line} has {n} elements");
        }
    }
}

#[test]
fn elements_follow_category_then_line_order() {
    let analysis = analyze_text("doc", AGREEMENT);
    let order: Vec<(Category, usize)> = analysis
        .elements
        .iter()
        .map(|e| (e.category_symbol, e.line_start))
        .collect();

    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[test]
fn report_matches_element_list() {
    let analysis = analyze_text("doc", AGREEMENT);
    let report = &analysis.report;

    assert_eq!(report.total_elements, analysis.elements.len());
    let per_category: usize = Category::ALL.iter().map(|c| report.count(*c)).sum();
    let per_bucket: usize = ComplexityBucket::ALL
        .iter()
        .map(|b| report.bucket_count(*b))
        .sum();
    let per_domain: usize = report.domain_distribution.values().sum();
    assert_eq!(per_category, report.total_elements);
    assert_eq!(per_bucket, report.total_elements);
    assert_eq!(per_domain, report.total_elements);

    assert_eq!(&aggregate(&analysis.elements), report);
}

#[test]
fn commercial_beats_procedural_on_tie() {
    let analysis = analyze_text("doc", "contract motion");
    assert_eq!(analysis.legal_domain, LegalDomain::Commercial);
}

#[test]
fn agreement_is_commercial() {
    let analysis = analyze_text("doc", AGREEMENT);
    assert_eq!(analysis.legal_domain, LegalDomain::Commercial);
    assert_eq!(
        analysis.report.domain_distribution.get(&LegalDomain::Commercial),
        Some(&analysis.elements.len())
    );
}

#[test]
fn analysis_survives_json_round_trip() {
    let analysis = analyze_text("doc", AGREEMENT);
    let json = serde_json::to_string(&analysis).unwrap();
    let back: DocumentAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, analysis);
}

#[test]
fn batch_isolates_failures() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("contract.txt"), AGREEMENT).unwrap();
    std::fs::write(dir.path().join("notes.md"), "Section 4. Notice").unwrap();
    std::fs::write(dir.path().join("broken.txt"), [0xc3u8, 0x28, 0xa0]).unwrap();
    std::fs::write(dir.path().join("ignored.pdf"), "Section 1").unwrap();

    let batch = analyze_directory(dir.path(), &Config::default()).unwrap();

    assert_eq!(batch.total_processed, 3);
    assert_eq!(batch.successful, 2);
    assert_eq!(batch.failed, 1);

    let failed: Vec<&DocumentOutcome> = batch
        .documents
        .iter()
        .filter(|d| d.analysis().is_none())
        .collect();
    assert!(matches!(
        failed[0],
        DocumentOutcome::Failed {
            kind: ErrorKind::DecodeError,
            ..
        }
    ));
    assert!(failed[0].source_id().ends_with("broken.txt"));

    let expected: usize = batch
        .documents
        .iter()
        .filter_map(|d| d.analysis())
        .map(|a| a.elements.len())
        .sum();
    assert_eq!(batch.report.total_elements, expected);
}

#[test]
fn oversized_document_fails_alone() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("big.txt"), "Section 1. ".repeat(20)).unwrap();
    std::fs::write(dir.path().join("small.txt"), "Section 1.").unwrap();

    let config = Config {
        max_document_size: 64,
        ..Config::default()
    };
    let batch = analyze_directory(dir.path(), &config).unwrap();

    assert_eq!(batch.successful, 1);
    match &batch.documents[0] {
        DocumentOutcome::Failed { kind, .. } => assert_eq!(*kind, ErrorKind::TooLarge),
        other => panic!("expected big.txt to fail, got {other:?}"),
    }
}
