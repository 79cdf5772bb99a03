use legalscan_core::batch::{self, DocumentOutcome};
use legalscan_core::config;
use legalscan_core::error::LegalScanError;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    directory: PathBuf,
    config_file: Option<PathBuf>,
    output_format: Option<String>,
    out_dir: Option<PathBuf>,
) -> Result<(), LegalScanError> {
    let config = config::load_or_default(config_file.as_deref())?;

    let paths = batch::collect_documents(&directory, &config)?;
    tracing::debug!(dir = %directory.display(), count = paths.len(), "collected documents");
    if paths.is_empty() {
        eprintln!(
            "No documents found in {} (supported: {})",
            directory.display(),
            config.supported_formats.join(", ")
        );
        return Ok(());
    }

    let result = batch::analyze_paths(&paths, &config);

    if let Some(ref dir) = out_dir {
        std::fs::create_dir_all(dir)?;
        let mut written = 0;
        for outcome in &result.documents {
            if let DocumentOutcome::Analyzed(analysis) = outcome {
                let path = dir.join(output_name(&analysis.source_id));
                std::fs::write(&path, serde_json::to_string_pretty(analysis)?)?;
                written += 1;
            }
        }
        eprintln!("{} analysis file(s) written to {}", written, dir.display());
    }

    match output_format.as_deref().unwrap_or(config.output_format.as_str()) {
        "json" => output::json::print(&result)?,
        _ => output::table::print_batch(&result),
    }

    Ok(())
}

/// `<stem>_analysis.json` for a source path.
fn output_name(source_id: &str) -> String {
    let stem = Path::new(source_id)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".into());
    format!("{stem}_analysis.json")
}
