//! Generation collaborator seam.
//!
//! The engine's job ends at the final merged configuration; turning that
//! configuration into an output document belongs to a generator behind the
//! [`Generate`] trait. [`ConfigEmitter`] is the default implementation used
//! by the CLI: it serializes the configuration itself, which makes the
//! pipeline inspectable end to end without an external generator.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Auxiliary options forwarded to the generator.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Extra files the generated output should pull in. Interpretation is
    /// generator-specific; [`ConfigEmitter`] has nowhere to put them and
    /// ignores the list.
    pub require: Vec<PathBuf>,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("generation failed: {0}")]
    Failed(String),
}

/// Consumes a final configuration and produces the output document.
pub trait Generate {
    fn generate(&self, config: &Value, options: &GenerateOptions) -> Result<String, GenerateError>;
}

/// Default generator: pretty-prints the final configuration as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigEmitter;

impl Generate for ConfigEmitter {
    fn generate(&self, config: &Value, _options: &GenerateOptions) -> Result<String, GenerateError> {
        let mut out = serde_json::to_string_pretty(config)?;
        out.push('\n');
        Ok(out)
    }
}
