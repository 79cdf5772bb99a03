use legalscan_core::batch::BatchReport;
use legalscan_core::error::LegalScanError;
use legalscan_core::report::{self, AnalysisReport};
use legalscan_core::DocumentAnalysis;
use std::path::PathBuf;

use crate::output;

/// Re-aggregate saved analyses. Counts are recomputed from the stored
/// elements rather than trusted from the stored summaries.
pub fn run(files: &[PathBuf], output_format: &str) -> Result<(), LegalScanError> {
    let mut merged = AnalysisReport::default();
    let mut documents = 0;

    for path in files {
        tracing::debug!(path = %path.display(), "reading stored analysis");
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        if value.get("documents").is_some() {
            let batch: BatchReport = serde_json::from_value(value)?;
            for analysis in batch.documents.iter().filter_map(|d| d.analysis()) {
                merged = merged.merge(&report::aggregate(&analysis.elements));
                documents += 1;
            }
        } else {
            let analysis: DocumentAnalysis = serde_json::from_value(value)?;
            merged = merged.merge(&report::aggregate(&analysis.elements));
            documents += 1;
        }
    }

    match output_format {
        "json" => output::json::print(&merged)?,
        _ => {
            println!("=== Merged report ({} document(s)) ===\n", documents);
            output::table::print_report(&merged);
        }
    }

    Ok(())
}
