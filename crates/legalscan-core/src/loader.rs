use crate::config::Config;
use crate::error::LegalScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A loaded document, ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The path as given, used as the element source id.
    pub source_id: String,
    pub text: String,
    /// Size on disk in bytes.
    pub size: u64,
    /// Extension including the dot, lower-cased.
    pub format: String,
}

/// Reads documents from disk with size and format checks.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    config: Config,
}

impl DocumentLoader {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Load one document. Checks existence, format and size before reading.
    pub fn load(&self, path: &Path) -> Result<Document, LegalScanError> {
        if !path.is_file() {
            return Err(LegalScanError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !self.config.supports_extension(&ext) {
            return Err(LegalScanError::UnsupportedFormat {
                path: path.to_path_buf(),
                format: if ext.is_empty() {
                    "(none)".to_string()
                } else {
                    format!(".{ext}")
                },
            });
        }

        let size = std::fs::metadata(path)?.len();
        if size > self.config.max_document_size {
            return Err(LegalScanError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.config.max_document_size,
            });
        }

        let bytes = std::fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|e| LegalScanError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Document {
            source_id: path.display().to_string(),
            text,
            size,
            format: format!(".{ext}"),
        })
    }
}
