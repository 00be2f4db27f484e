//! YAML loading for hand-written seed catalogs.
//!
//! A seed file holds top-level `shows`, `seasons`, `episodes`, `cast` and `crew`
//! sequences using the same field names as the stored records.

use std::path::Path;

use thiserror::Error;

use crate::seed::SeedCatalog;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("File not found: {0}")]
    NotFound(String),
}

/// Load a seed catalog from a YAML file.
pub fn load_seed_file(path: &Path) -> Result<SeedCatalog, YamlError> {
    if !path.is_file() {
        return Err(YamlError::NotFound(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_seed(&contents).map_err(|e| match e {
        YamlError::Parse { source, .. } => YamlError::Parse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Parse a seed catalog from YAML text.
pub fn parse_seed(contents: &str) -> Result<SeedCatalog, YamlError> {
    // An empty document is an empty catalog, not an error.
    if contents.trim().is_empty() {
        return Ok(SeedCatalog::default());
    }
    serde_yml::from_str(contents).map_err(|e| YamlError::Parse {
        path: "<inline>".to_string(),
        source: e,
    })
}
