//! Export types: format selection, manifest, warnings, report, progress.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Interchange format for serialized entity records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Block-style YAML, human-diffable, long text as literal blocks
    Yaml,
    /// Pretty-printed JSON with non-ASCII preserved literally
    Json,
}

impl ExportFormat {
    /// File extension used for serialized entity entries.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Yaml => "yaml",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Yaml => write!(f, "yaml"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Invalid export format '{}'. Use 'yaml' or 'json'", s)),
        }
    }
}

/// Manifest describing the export run itself, written as `_meta.json`
/// regardless of the chosen entity format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    /// Tool version that produced the archive
    pub version: String,
    /// Export timestamp (RFC 3339)
    pub date: String,
    /// Producer identifier
    pub called_from: String,
}

/// Recoverable problems collected during an export run.
///
/// Warnings never abort the run; they are returned on the report for
/// caller visibility.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportWarning {
    /// A referenced media source file was absent; the entry was skipped.
    MediaMissing { owner: String, path: PathBuf },
}

impl std::fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportWarning::MediaMissing { owner, path } => {
                write!(f, "media file {} for \"{}\" is missing", path.display(), owner)
            }
        }
    }
}

/// Result of a completed export run.
#[derive(Debug)]
pub struct ExportReport {
    /// Path of the finished container
    pub path: PathBuf,
    /// Number of cocktail records written
    pub cocktails: usize,
    /// Number of ingredient records written
    pub ingredients: usize,
    /// Number of media files copied into the container
    pub media_files: usize,
    /// Recoverable problems encountered along the way
    pub warnings: Vec<ExportWarning>,
}

/// Progress callback for long-running export runs.
pub trait ExportProgress: Send + Sync {
    /// Called when progress is made.
    fn on_progress(&self, current: u64, total: u64, message: &str);

    /// Called when the operation completes.
    fn on_complete(&self, total: u64);

    /// Called when an error occurs.
    fn on_error(&self, error: &str);
}

/// No-op progress reporter for when progress isn't needed.
pub struct NoopProgress;

impl ExportProgress for NoopProgress {
    fn on_progress(&self, _current: u64, _total: u64, _message: &str) {}
    fn on_complete(&self, _total: u64) {}
    fn on_error(&self, _error: &str) {}
}

/// Simple console progress reporter.
pub struct ConsoleProgress {
    prefix: String,
}

impl ConsoleProgress {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ExportProgress for ConsoleProgress {
    fn on_progress(&self, current: u64, total: u64, message: &str) {
        eprint!("\r{} {} ({}/{})", self.prefix, message, current, total);
    }

    fn on_complete(&self, total: u64) {
        eprintln!("\r{} Complete. {} entries written.", self.prefix, total);
    }

    fn on_error(&self, error: &str) {
        eprintln!("\r{} Error: {}", self.prefix, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::from_str("yaml").unwrap(), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_str("YML").unwrap(), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("toml").is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }
}
