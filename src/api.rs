use std::collections::HashSet;

use serde_json::Value;

use crate::catalog::{Catalog, default_catalog};
use crate::engine::{Diagnostic, Outcome, ScanExpression, merge_fragments, overlay, resolve, validate};

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Final merged configuration; caller keys win at every colliding path.
    pub config: Value,
    /// Deduplicated class names across all inputs, in first-occurrence order.
    pub class_names: Vec<String>,
    /// Non-fatal resolution escalations, in class-name order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Extract configuration from `texts` using the built-in default catalog.
///
/// # Example
/// ```
/// use serde_json::json;
///
/// let caller = json!({ "config": { "namespace": "#atomic", "start": "left", "end": "right" } });
/// let out = atomik::extract(&["<div class='D-b'>"], &caller).unwrap();
/// assert_eq!(out.config["Display"]["b"], json!(true));
/// ```
pub fn extract<T: AsRef<str>>(texts: &[T], caller: &Value) -> Result<RunResult, crate::Error> {
    extract_with(texts, default_catalog(), caller)
}

/// Extract configuration from `texts` against an explicit catalog.
///
/// The full pipeline: validate caller configuration, scan every text with one
/// compiled expression, deduplicate class names across texts, resolve each
/// name into a fragment, fold the fragments, and overlay the caller
/// configuration on the result. Validation failure aborts the run; every
/// other problem surfaces as a [`Diagnostic`] and the run completes with a
/// best-effort configuration.
pub fn extract_with<T: AsRef<str>>(texts: &[T], catalog: &Catalog, caller: &Value) -> Result<RunResult, crate::Error> {
    validate(caller, "config")?;

    let expression = ScanExpression::compile(catalog)?;
    let mut seen = HashSet::new();
    let mut class_names: Vec<String> = Vec::new();
    for text in texts {
        for class_name in expression.scan(text.as_ref()) {
            if seen.insert(class_name.to_string()) {
                class_names.push(class_name.to_string());
            }
        }
    }

    let mut diagnostics = Vec::new();
    let mut fragments = Vec::with_capacity(class_names.len());
    for class_name in &class_names {
        let resolution = resolve(class_name, catalog, caller);
        match resolution.outcome {
            Outcome::Unresolvable => {
                tracing::debug!(class = %class_name, "class matches no catalog pattern, dropping");
            }
            outcome => {
                if let Some(diagnostic) = outcome.into_diagnostic(class_name) {
                    diagnostics.push(diagnostic);
                }
            }
        }
        fragments.push(resolution.fragment);
    }

    let generated = merge_fragments(fragments).into_value();
    let config = overlay(generated, caller);

    Ok(RunResult { config, class_names, diagnostics })
}
