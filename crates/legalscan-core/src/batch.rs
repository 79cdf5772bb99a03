//! Multi-document analysis.
//!
//! Each document is loaded and analysed on its own; a failure is recorded for
//! that document and the rest carry on. Outcomes and the merged report are
//! ordered by source id, so parallel and sequential runs give the same
//! result.

use crate::config::Config;
use crate::error::{ErrorKind, LegalScanError};
use crate::loader::DocumentLoader;
use crate::report::{self, AnalysisReport};
use crate::{analyze_document, DocumentAnalysis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DocumentOutcome {
    Analyzed(DocumentAnalysis),
    Failed {
        source_id: String,
        kind: ErrorKind,
        error: String,
    },
}

impl DocumentOutcome {
    pub fn source_id(&self) -> &str {
        match self {
            DocumentOutcome::Analyzed(a) => &a.source_id,
            DocumentOutcome::Failed { source_id, .. } => source_id,
        }
    }

    pub fn analysis(&self) -> Option<&DocumentAnalysis> {
        match self {
            DocumentOutcome::Analyzed(a) => Some(a),
            DocumentOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub documents: Vec<DocumentOutcome>,
    /// Merged over every successfully analysed document.
    pub report: AnalysisReport,
}

impl BatchReport {
    fn from_outcomes(mut documents: Vec<DocumentOutcome>) -> Self {
        documents.sort_by(|a, b| a.source_id().cmp(b.source_id()));

        let successful = documents.iter().filter(|d| d.analysis().is_some()).count();
        let report =
            report::merge_all(documents.iter().filter_map(|d| d.analysis()).map(|a| &a.report));

        BatchReport {
            total_processed: documents.len(),
            successful,
            failed: documents.len() - successful,
            documents,
            report,
        }
    }
}

fn analyze_path(loader: &DocumentLoader, path: &Path) -> DocumentOutcome {
    match loader.load(path) {
        Ok(doc) => DocumentOutcome::Analyzed(analyze_document(&doc)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "document failed");
            DocumentOutcome::Failed {
                source_id: path.display().to_string(),
                kind: e.kind(),
                error: e.to_string(),
            }
        }
    }
}

/// Load and analyse each path. Never fails as a whole.
pub fn analyze_paths(paths: &[PathBuf], config: &Config) -> BatchReport {
    let loader = DocumentLoader::new(config);

    let outcomes: Vec<DocumentOutcome> = if config.parallel {
        paths.par_iter().map(|p| analyze_path(&loader, p)).collect()
    } else {
        paths.iter().map(|p| analyze_path(&loader, p)).collect()
    };

    let batch = BatchReport::from_outcomes(outcomes);
    tracing::info!(
        total = batch.total_processed,
        successful = batch.successful,
        failed = batch.failed,
        "batch complete"
    );
    batch
}

/// Supported files directly inside `dir`, sorted by path.
pub fn collect_documents(dir: &Path, config: &Config) -> Result<Vec<PathBuf>, LegalScanError> {
    if !dir.is_dir() {
        return Err(LegalScanError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let supported = path
            .extension()
            .map(|e| config.supports_extension(&e.to_string_lossy()))
            .unwrap_or(false);
        if supported {
            paths.push(path);
        } else {
            tracing::debug!(path = %path.display(), "skipping unsupported file");
        }
    }
    paths.sort();
    Ok(paths)
}

/// Analyse every supported file in a directory.
pub fn analyze_directory(dir: &Path, config: &Config) -> Result<BatchReport, LegalScanError> {
    let paths = collect_documents(dir, config)?;
    Ok(analyze_paths(&paths, config))
}
