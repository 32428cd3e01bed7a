//! Pack-specific error types.
//!
//! Every error carries enough context (file path, table, row, field) to fix
//! the offending rate or zone table without re-running the loader under a
//! debugger.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationIssue;

/// Errors that can occur while loading a rate pack.
#[derive(Debug, Error)]
pub enum PackError {
    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Neither a pack document nor a rates/zones pair was given.
    #[error("no rate pack given (expected a pack document or both a rates and a zones file)")]
    MissingSource,

    /// The file extension does not name a supported format.
    #[error("unsupported pack format for {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// One or more rows violate the table rules.
    #[error("{} validation error(s): {}", .issues.len(), join_issues(.issues))]
    Validation { issues: Vec<ValidationIssue> },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Table;

    #[test]
    fn file_not_found_display() {
        let err = PackError::FileNotFound {
            path: PathBuf::from("/tmp/missing.yaml"),
        };
        assert!(format!("{err}").contains("/tmp/missing.yaml"));
    }

    #[test]
    fn validation_display_lists_every_issue() {
        let err = PackError::Validation {
            issues: vec![
                ValidationIssue::new(Table::Rates, Some(0), "baseRate", "not a number: \"abc\""),
                ValidationIssue::new(Table::Zones, Some(2), "prefix", "must not be empty"),
            ],
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("2 validation error(s)"));
        assert!(msg.contains("rates[0].baseRate"));
        assert!(msg.contains("zones[2].prefix"));
    }
}
