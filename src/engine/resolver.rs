//! Class-name resolution.
//!
//! Resolution maps one scanned class name back onto the catalog:
//!
//! ```text
//! "M-10px" ──▶ split at first '-' ──▶ prefix ".M-", suffix "10px"
//!                      │
//!                      ▼
//!        first catalog pattern with that prefix
//!                      │
//!        ┌─────────────┼──────────────────────┐
//!        ▼             ▼                      ▼
//!   enumerated     suffix-as-value      caller-declared
//!   suffix         (auto custom)        custom lookup
//! ```
//!
//! `resolve` never fails and never logs. Every call returns a [`Resolution`]:
//! a best-effort [`Fragment`] plus a tagged [`Outcome`] describing how the
//! class was (or was not) mapped. The caller decides whether an outcome
//! becomes a warning, a collected [`Diagnostic`], or a hard stop.
//!
//! Both scans over the catalog are linear and first-match-wins; catalog order
//! is part of the contract.

use std::fmt;

use serde_json::Value;

use crate::catalog::Catalog;
use crate::fragment::{CustomEntry, Fragment};

/// How a single class name was mapped against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Mapped to a fragment entry, or already covered by a caller-declared
    /// custom entry (in which case the fragment is intentionally empty).
    Resolved,
    /// The suffix is not enumerated, not auto-resolvable, and the caller has
    /// declared no custom list for this pattern.
    AmbiguousSuffix { pattern_id: String, suffix: String },
    /// The caller declared a custom list for this pattern, but no entry in it
    /// matches the suffix.
    SuffixMismatch { pattern_id: String, suffix: String },
    /// The prefix matches no catalog pattern. Indicates a scanner/catalog
    /// inconsistency rather than an operator error.
    Unresolvable,
}

impl Outcome {
    /// Materialize the user-facing diagnostic for this outcome, if any.
    ///
    /// `Resolved` and `Unresolvable` produce none: the former needs no
    /// action, the latter is dropped silently as a catalog defect.
    pub fn into_diagnostic(self, class_name: &str) -> Option<Diagnostic> {
        match self {
            Outcome::Resolved | Outcome::Unresolvable => None,
            Outcome::AmbiguousSuffix { pattern_id, suffix } => Some(Diagnostic {
                class_name: class_name.to_string(),
                pattern_id,
                suffix,
                kind: DiagnosticKind::AmbiguousSuffix,
            }),
            Outcome::SuffixMismatch { pattern_id, suffix } => Some(Diagnostic {
                class_name: class_name.to_string(),
                pattern_id,
                suffix,
                kind: DiagnosticKind::SuffixMismatch,
            }),
        }
    }
}

/// Fragment plus outcome for one class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub fragment: Fragment,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    AmbiguousSuffix,
    SuffixMismatch,
}

/// A non-fatal, operator-actionable resolution escalation.
///
/// `Display` renders the exact configuration snippet the operator should add
/// for the offending class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub class_name: String,
    pub pattern_id: String,
    pub suffix: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::AmbiguousSuffix => {
                writeln!(f, "class `{}` must be added manually to the configuration:", self.class_name)?;
            }
            DiagnosticKind::SuffixMismatch => {
                writeln!(
                    f,
                    "class `{}` matches no custom suffix declared for `{}`; add:",
                    self.class_name, self.pattern_id
                )?;
            }
        }
        writeln!(f, "\"{}\": {{", self.pattern_id)?;
        writeln!(f, "  \"custom\": [")?;
        writeln!(f, "    {{ \"suffix\": \"{}\", \"values\": [\"YOUR-CUSTOM-VALUE\"] }}", self.suffix)?;
        writeln!(f, "  ]")?;
        write!(f, "}}")
    }
}

/// Resolve `class_name` into a configuration fragment.
///
/// `caller` is the caller configuration, consulted only for escalation
/// decisions: a suffix the catalog cannot place may already be declared under
/// `caller[pattern_id].custom`, in which case the caller's value is
/// authoritative and the returned fragment contributes nothing for that id.
pub fn resolve(class_name: &str, catalog: &Catalog, caller: &Value) -> Resolution {
    // Everything up to and including the first '-' is the candidate prefix;
    // a class without one degenerates to prefix "." and can match nothing.
    let sep = class_name.find('-').map_or(0, |i| i + 1);
    let prefix = format!(".{}", &class_name[..sep]);
    let suffix = &class_name[sep..];

    let Some(pattern) = catalog.find_by_prefix(&prefix) else {
        return Resolution { fragment: Fragment::empty(), outcome: Outcome::Unresolvable };
    };

    if pattern.rules.iter().any(|rule| rule.suffix == suffix) {
        return Resolution {
            fragment: Fragment::with_suffix(&pattern.id, suffix),
            outcome: Outcome::Resolved,
        };
    }

    // Suffix not enumerated: escalate.
    if pattern.allow_suffix_to_value {
        return Resolution {
            fragment: Fragment::with_custom(&pattern.id, CustomEntry::suffix_as_value(suffix)),
            outcome: Outcome::Resolved,
        };
    }

    match caller_custom_suffixes(caller, &pattern.id) {
        Some(declared) if declared.iter().any(|s| *s == suffix) => {
            Resolution { fragment: Fragment::empty(), outcome: Outcome::Resolved }
        }
        Some(_) => Resolution {
            fragment: Fragment::empty(),
            outcome: Outcome::SuffixMismatch { pattern_id: pattern.id.clone(), suffix: suffix.to_string() },
        },
        None => Resolution {
            fragment: Fragment::empty(),
            outcome: Outcome::AmbiguousSuffix { pattern_id: pattern.id.clone(), suffix: suffix.to_string() },
        },
    }
}

/// Suffixes of the caller's `custom` list for `pattern_id`, if one exists.
fn caller_custom_suffixes<'a>(caller: &'a Value, pattern_id: &str) -> Option<Vec<&'a str>> {
    let list = caller.get(pattern_id)?.get("custom")?.as_array()?;
    Some(list.iter().filter_map(|entry| entry.get("suffix").and_then(Value::as_str)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Pattern, SuffixRule};
    use serde_json::json;

    fn pattern(id: &str, prefix: &str, suffixes: &[&str], allow: bool) -> Pattern {
        Pattern {
            id: id.to_string(),
            prefix: Some(prefix.to_string()),
            rules: suffixes.iter().map(|s| SuffixRule { suffix: (*s).to_string() }).collect(),
            allow_suffix_to_value: allow,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            pattern("Display", ".D-", &["n", "b"], false),
            pattern("Margin", ".M-", &[], true),
            pattern("Color", ".C-", &["red"], false),
        ])
    }

    fn no_config() -> Value {
        json!({})
    }

    #[test]
    fn enumerated_suffix_resolves_to_boolean_entry() {
        let res = resolve("D-b", &catalog(), &no_config());
        assert_eq!(res.outcome, Outcome::Resolved);
        assert_eq!(res.fragment, Fragment::with_suffix("Display", "b"));
    }

    #[test]
    fn suffix_as_value_resolves_to_custom_entry() {
        let res = resolve("M-10px", &catalog(), &no_config());
        assert_eq!(res.outcome, Outcome::Resolved);
        assert_eq!(res.fragment, Fragment::with_custom("Margin", CustomEntry::suffix_as_value("10px")));
    }

    #[test]
    fn unknown_suffix_without_caller_entry_is_ambiguous() {
        let res = resolve("C-blue", &catalog(), &no_config());
        assert_eq!(
            res.outcome,
            Outcome::AmbiguousSuffix { pattern_id: "Color".into(), suffix: "blue".into() }
        );
        assert!(res.fragment.is_empty());
    }

    #[test]
    fn caller_declared_custom_suffix_resolves_silently() {
        let caller = json!({
            "Color": { "custom": [ { "suffix": "blue", "values": ["#00f"] } ] }
        });
        let res = resolve("C-blue", &catalog(), &caller);
        assert_eq!(res.outcome, Outcome::Resolved);
        // The caller's value is authoritative; the fragment stays empty.
        assert!(res.fragment.is_empty());
    }

    #[test]
    fn caller_custom_list_without_matching_suffix_is_a_mismatch() {
        let caller = json!({
            "Color": { "custom": [ { "suffix": "brand", "values": ["#c00"] } ] }
        });
        let res = resolve("C-blue", &catalog(), &caller);
        assert_eq!(
            res.outcome,
            Outcome::SuffixMismatch { pattern_id: "Color".into(), suffix: "blue".into() }
        );
        assert!(res.fragment.is_empty());
    }

    #[test]
    fn unknown_prefix_is_unresolvable() {
        let res = resolve("X-1", &catalog(), &no_config());
        assert_eq!(res.outcome, Outcome::Unresolvable);
        assert!(res.fragment.is_empty());
    }

    #[test]
    fn class_without_separator_is_unresolvable() {
        let res = resolve("Display", &catalog(), &no_config());
        assert_eq!(res.outcome, Outcome::Unresolvable);
        assert!(res.fragment.is_empty());
    }

    #[test]
    fn first_pattern_wins_on_duplicate_prefixes() {
        let cat = Catalog::new(vec![
            pattern("First", ".X-", &["a"], false),
            pattern("Second", ".X-", &["a"], false),
        ]);
        let res = resolve("X-a", &cat, &no_config());
        assert_eq!(res.fragment, Fragment::with_suffix("First", "a"));
    }

    #[test]
    fn diagnostic_renders_actionable_snippet() {
        let outcome = Outcome::AmbiguousSuffix { pattern_id: "Color".into(), suffix: "blue".into() };
        let diagnostic = outcome.into_diagnostic("C-blue").unwrap();
        let rendered = diagnostic.to_string();
        assert!(rendered.contains("class `C-blue`"));
        assert!(rendered.contains("\"Color\": {"));
        assert!(rendered.contains("{ \"suffix\": \"blue\", \"values\": [\"YOUR-CUSTOM-VALUE\"] }"));
    }

    #[test]
    fn resolved_and_unresolvable_produce_no_diagnostic() {
        assert!(Outcome::Resolved.into_diagnostic("D-b").is_none());
        assert!(Outcome::Unresolvable.into_diagnostic("X-1").is_none());
    }
}
