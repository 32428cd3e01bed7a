//! Shared YAML/JSON file loading.
//!
//! The document format is chosen from the file extension. All loaders go
//! through [`load_document`] so that missing files and parse failures carry
//! the offending path.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{PackError, PackResult};

/// Serialization format of a pack document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.yaml` or `.yml`.
    Yaml,
    /// `.json`.
    Json,
}

impl DocumentFormat {
    /// Infer the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> PackResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(PackError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn read_file(path: &Path) -> PackResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackError::Io(e)
        }
    })
}

/// Load a YAML or JSON file into a strongly-typed struct.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> PackResult<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = read_file(path)?;
    match format {
        DocumentFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| PackError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        }),
        DocumentFormat::Json => serde_json::from_str(&content).map_err(|e| PackError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
