//! Caller-configuration loading.
//!
//! Caller configuration arrives through two surfaces: a JSON file and an
//! inline JSON document. Either alone is sufficient; when both are supplied
//! the inline document is overlaid on the file-loaded one, so inline keys win
//! at every colliding path (same rule as the final merge).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::engine::overlay;

/// Failures on the caller-configuration surface. All fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration JSON in {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid inline configuration JSON: {0}")]
    ParseInline(#[source] serde_json::Error),
    #[error("a configuration file or an inline configuration is required")]
    Missing,
}

/// Load caller configuration from an optional file and an optional inline
/// document.
pub fn load_caller_config(file: Option<&Path>, inline: Option<&str>) -> Result<Value, ConfigError> {
    let from_file = file
        .map(|path| {
            let json = fs::read_to_string(path)
                .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
            serde_json::from_str(&json)
                .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
        })
        .transpose()?;
    let from_inline = inline.map(|json| serde_json::from_str(json).map_err(ConfigError::ParseInline)).transpose()?;

    match (from_file, from_inline) {
        (None, None) => Err(ConfigError::Missing),
        (Some(config), None) => Ok(config),
        (None, Some(config)) => Ok(config),
        (Some(base), Some(over)) => Ok(overlay(base, &over)),
    }
}
