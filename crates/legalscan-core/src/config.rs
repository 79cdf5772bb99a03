use crate::error::LegalScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: &[&str] = &["table", "json"];

/// Loader and batch settings. The extraction engine itself takes no
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Largest document accepted by the loader, in bytes.
    pub max_document_size: u64,
    /// File extensions the loader accepts, including the leading dot.
    pub supported_formats: Vec<String>,
    /// Default CLI output: "table" or "json".
    pub output_format: String,
    /// Analyse batch documents on the rayon thread pool.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_document_size: 1_000_000,
            supported_formats: vec![".txt".into(), ".md".into(), ".json".into()],
            output_format: "table".into(),
            parallel: true,
        }
    }
}

impl Config {
    /// Whether a file extension (with or without the dot) is accepted.
    pub fn supports_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.supported_formats
            .iter()
            .any(|f| f.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Load a config from a JSON file.
pub fn load_config(path: &Path) -> Result<Config, LegalScanError> {
    let content = std::fs::read_to_string(path).map_err(|e| LegalScanError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: Config = serde_json::from_str(&content).map_err(|e| LegalScanError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, LegalScanError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(Config::default()),
    }
}

/// Parse a config from a JSON string (no file path context).
pub fn parse_config(json: &str) -> Result<Config, LegalScanError> {
    let config: Config = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<(), LegalScanError> {
    if config.max_document_size == 0 {
        return Err(LegalScanError::ConfigInvalid(
            "max_document_size must be greater than zero".into(),
        ));
    }

    if config.supported_formats.is_empty() {
        return Err(LegalScanError::ConfigInvalid(
            "supported_formats must not be empty".into(),
        ));
    }

    for format in &config.supported_formats {
        if !format.starts_with('.') || format.len() < 2 {
            return Err(LegalScanError::ConfigInvalid(format!(
                "invalid format '{}' (expected an extension such as '.txt')",
                format
            )));
        }
    }

    if !OUTPUT_FORMATS.contains(&config.output_format.as_str()) {
        return Err(LegalScanError::ConfigInvalid(format!(
            "unknown output_format '{}'. Available: {}",
            config.output_format,
            OUTPUT_FORMATS.join(", ")
        )));
    }

    Ok(())
}
