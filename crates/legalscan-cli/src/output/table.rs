use legalscan_core::batch::{BatchReport, DocumentOutcome};
use legalscan_core::model::Category;
use legalscan_core::report::{AnalysisReport, ComplexityBucket};
use legalscan_core::DocumentAnalysis;

const SNIPPET_WIDTH: usize = 60;

pub fn print_analysis(analysis: &DocumentAnalysis, show_elements: bool) {
    println!("=== {} ===\n", analysis.source_id);

    println!(
        "  Domain: {} (jurisdiction: {})   Lines: {}   Elements: {}\n",
        analysis.legal_domain,
        analysis.jurisdiction,
        analysis.line_count,
        analysis.report.total_elements
    );

    // Domain scores, winner marked
    println!("  Domain scores:");
    for score in &analysis.domain_scores.scores {
        let marker = if score.domain == analysis.legal_domain {
            " *"
        } else {
            ""
        };
        println!(
            "    {:<15} {:>4}  (keywords {}, patterns {}){}",
            score.domain,
            score.total(),
            score.keyword_hits,
            score.pattern_hits,
            marker
        );
    }
    println!();

    print_report(&analysis.report);

    let refs = &analysis.references;
    let has_refs = !(refs.section_refs.is_empty()
        && refs.article_refs.is_empty()
        && refs.statute_refs.is_empty()
        && refs.case_citations.is_empty()
        && refs.key_phrases.is_empty());
    if has_refs {
        println!("  References:");
        print_list("Sections", &refs.section_refs);
        print_list("Articles", &refs.article_refs);
        print_list("Statutes", &refs.statute_refs);
        print_list("Citations", &refs.case_citations);
        print_list("Key phrases", &refs.key_phrases);
        println!();
    }
    println!(
        "  Text: {} chars, {} words, {} sentences\n",
        refs.stats.length, refs.stats.word_count, refs.stats.sentence_count
    );

    if show_elements && !analysis.elements.is_empty() {
        println!("  Elements:");
        let max_match = analysis
            .elements
            .iter()
            .map(|e| e.matched_text.chars().count().min(30))
            .max()
            .unwrap_or(10);
        for el in &analysis.elements {
            println!(
                "    L{:<4} {} {:<9} {:>2}  {:<width$}  | {}",
                el.line_start,
                el.category_symbol.glyph(),
                el.category_symbol,
                el.complexity_score,
                truncate(&el.matched_text, 30),
                truncate(&el.content_snippet, SNIPPET_WIDTH),
                width = max_match
            );
        }
        println!();
    }
}

pub fn print_report(report: &AnalysisReport) {
    println!("  Elements by category:");
    for category in Category::ALL {
        println!(
            "    {} {:<10} {:>5}",
            category.glyph(),
            category,
            report.count(category)
        );
    }
    println!();

    println!("  Complexity:");
    for bucket in ComplexityBucket::ALL {
        println!("    {:<13} {:>5}", bucket.as_str(), report.bucket_count(bucket));
    }
    println!();

    if !report.domain_distribution.is_empty() {
        println!("  Domains:");
        for (domain, count) in &report.domain_distribution {
            println!("    {:<15} {:>5}", domain, count);
        }
        println!();
    }
}

pub fn print_batch(batch: &BatchReport) {
    println!("=== Batch summary ===\n");
    println!("  Total documents     {:>5}", batch.total_processed);
    println!("  Analyzed            {:>5}", batch.successful);
    println!("  Failed              {:>5}", batch.failed);
    if batch.total_processed > 0 {
        println!(
            "  Success rate        {:>5.1}%",
            batch.successful as f64 / batch.total_processed as f64 * 100.0
        );
    }
    println!();

    let max_name = batch
        .documents
        .iter()
        .map(|d| d.source_id().len())
        .max()
        .unwrap_or(10);

    for outcome in &batch.documents {
        match outcome {
            DocumentOutcome::Analyzed(a) => println!(
                "  {:<width$}  {:<15} {:>4} element(s)",
                a.source_id,
                a.legal_domain,
                a.report.total_elements,
                width = max_name
            ),
            DocumentOutcome::Failed {
                source_id, error, ..
            } => println!("  {:<width$}  FAILED: {}", source_id, error, width = max_name),
        }
    }
    println!();

    print_report(&batch.report);
}

fn print_list(label: &str, items: &[String]) {
    if !items.is_empty() {
        println!("    {:<12} {}", label, items.join(", "));
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
