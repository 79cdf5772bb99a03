use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LegalScanError {
    #[error("document not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("document too large: {} is {size} bytes (limit {limit})", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("failed to decode {} as UTF-8: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("unsupported document format '{format}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, format: String },

    #[error("failed to load config from {}: {reason}", path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialisable failure category, recorded per document in batch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    TooLarge,
    DecodeError,
    UnsupportedFormat,
    Config,
    Io,
    Json,
}

impl LegalScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LegalScanError::NotFound { .. } => ErrorKind::NotFound,
            LegalScanError::TooLarge { .. } => ErrorKind::TooLarge,
            LegalScanError::Decode { .. } => ErrorKind::DecodeError,
            LegalScanError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            LegalScanError::ConfigLoad { .. } | LegalScanError::ConfigInvalid(_) => {
                ErrorKind::Config
            }
            LegalScanError::NotADirectory { .. } | LegalScanError::Io(_) => ErrorKind::Io,
            LegalScanError::Json(_) => ErrorKind::Json,
        }
    }
}
