//! Token scanning.
//!
//! The matcher turns a catalog into one composite regular expression able to
//! detect every shorthand class the catalog can describe, then extracts all
//! occurrences from raw text:
//!
//! ```text
//! catalog ── ScanExpression::compile ──▶ ScanExpression
//!                                             │
//! text ────────── scan(text) ────────────────┼──▶ "D-b", "M-10px", ...
//! ```
//!
//! Per pattern, compilation emits:
//!
//! 1. One literal alternative per enumerated `prefix+suffix` pair, escaped
//!    and anchored on a trailing `\b`.
//! 2. For any pattern with a prefix, one generic alternative
//!    `prefix(?:neg)?[0-9]+(?:[a-zA-Z%]+)?` covering parametric classes
//!    (numeric or unit-suffixed) that cannot be enumerated as literals.
//!
//! Patterns with neither rules nor a prefix contribute nothing; they are only
//! discoverable through caller configuration.
//!
//! The compiled expression holds no cursor state: `scan` is restartable and
//! one `ScanExpression` can serve any number of texts.

use crate::catalog::Catalog;
use regex::Regex;

/// Composite scanning expression compiled from a catalog.
#[derive(Debug, Clone)]
pub struct ScanExpression {
    // None when the catalog produced no alternatives; such an expression
    // matches nothing.
    re: Option<Regex>,
}

impl ScanExpression {
    /// Compile `catalog` into a single find-all alternation.
    ///
    /// Prefix and suffix literals are escaped before composition, so catalog
    /// entries containing regex metacharacters cannot malform the expression.
    pub fn compile(catalog: &Catalog) -> Result<Self, regex::Error> {
        let mut alternatives = Vec::new();

        for pattern in catalog.patterns() {
            let prefix = pattern.prefix.as_deref().unwrap_or("");
            let prefix = prefix.strip_prefix('.').unwrap_or(prefix);

            for rule in &pattern.rules {
                alternatives.push(format!("{}\\b", regex::escape(&format!("{prefix}{}", rule.suffix))));
            }
            if pattern.prefix.is_some() {
                alternatives.push(format!("{}(?:neg)?[0-9]+(?:[a-zA-Z%]+)?", regex::escape(prefix)));
            }
        }

        if alternatives.is_empty() {
            return Ok(ScanExpression { re: None });
        }

        let re = Regex::new(&format!("({})", alternatives.join("|")))?;
        Ok(ScanExpression { re: Some(re) })
    }

    /// Yield every match in `text`, left to right.
    ///
    /// Lazy and finite; duplicates are preserved here and removed by the
    /// caller across all texts of one run.
    pub fn scan<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.re.iter().flat_map(move |re| re.find_iter(text).map(|m| m.as_str()))
    }
}
