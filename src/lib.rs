//! atomik: a rule-driven atomic class-name resolution engine.
//!
//! Given a catalog of naming patterns, atomik compiles one scanning
//! expression that detects every shorthand class the catalog describes,
//! extracts all occurrences from input texts, resolves each class back into a
//! configuration fragment, and merges the fragments (with caller
//! configuration overlaid) into the final configuration for a generator.
//!
//! ```
//! use serde_json::json;
//!
//! let caller = json!({ "config": { "namespace": "#atomic", "start": "left", "end": "right" } });
//! let out = atomik::extract(&["<div class='D-b M-10px'>"], &caller).unwrap();
//!
//! assert_eq!(out.class_names, vec!["D-b", "M-10px"]);
//! assert_eq!(out.config["Display"]["b"], json!(true));
//! ```

use thiserror::Error;

mod api;
mod catalog;
mod config;
mod engine;
mod fragment;
mod generate;

pub use api::{RunResult, extract, extract_with};
pub use catalog::{Catalog, CatalogError, Pattern, SuffixRule, default_catalog};
pub use config::{ConfigError, load_caller_config};
pub use engine::{
    Diagnostic, DiagnosticKind, Outcome, Resolution, ScanExpression, ShapeError, merge_fragments, overlay, resolve,
    validate,
};
pub use fragment::{CustomEntry, Fragment, PatternConfig};
pub use generate::{ConfigEmitter, Generate, GenerateError, GenerateOptions};

// --- Crate-level error ------------------------------------------------------

/// Errors that abort a whole extraction run. Per-class problems are not
/// errors; they surface as [`Diagnostic`] values on the run result.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to compile scanning expression: {0}")]
    Compile(#[from] regex::Error),
}
