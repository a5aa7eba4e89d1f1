//! Pattern catalog: the ordered table of naming rules.
//!
//! A [`Pattern`] describes one family of shorthand class names through a
//! literal `prefix` (CSS selector form, e.g. `".M-"`) and an optional ordered
//! list of enumerated suffixes. The catalog as a whole is an *ordered*
//! sequence: both the resolver and the matcher walk it front to back, and the
//! first entry satisfying a predicate wins. Lookups stay linear over a plain
//! vector; a hash index would lose the tie-breaking order.
//!
//! Catalogs come from two places:
//!
//! - [`default_catalog`]: the built-in set covering the common atomic class
//!   families, compiled into the binary.
//! - [`Catalog::from_json_str`] / [`Catalog::from_file`]: external JSON
//!   catalogs, loaded once per process.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

/// One enumerated suffix of a pattern.
///
/// External catalogs may carry extra per-rule fields (values, docs); only the
/// suffix participates in resolution, the rest is ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
}

/// One family of recognizable shorthand class names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    /// Unique key identifying the pattern in output configuration.
    pub id: String,
    /// Literal leading marker including the separator, in CSS selector form
    /// (e.g. `".D-"`). `None` for prefix-less patterns, which are only
    /// discoverable through caller configuration.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Ordered sequence of known suffix literals; may be empty.
    #[serde(default)]
    pub rules: Vec<SuffixRule>,
    /// When true, a suffix not found in `rules` still resolves by treating
    /// the suffix text itself as the value.
    #[serde(default)]
    pub allow_suffix_to_value: bool,
}

/// Ordered pattern table.
///
/// Invariant: prefixes are unique across the catalog. Lookups are linear and
/// first-match-wins, so catalog order is semantically load-bearing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    patterns: Vec<Pattern>,
}

impl Catalog {
    /// Create a catalog from an ordered pattern list.
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Catalog { patterns }
    }

    /// The patterns in catalog order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// First pattern whose prefix equals `prefix` (string equality).
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.prefix.as_deref() == Some(prefix))
    }

    /// Parse a catalog from a JSON array of pattern records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(CatalogError::Parse)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }
}

/// Failures while loading an external catalog. Always fatal: a run without a
/// catalog has nothing to scan for.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// The built-in default catalog.
///
/// Covers the common atomic class families. Immutable and shared; runs that
/// need different rules pass their own [`Catalog`] instead.
pub fn default_catalog() -> &'static Catalog {
    static DEFAULT: Lazy<Catalog> = Lazy::new(builtin_patterns);
    &DEFAULT
}

fn builtin_patterns() -> Catalog {
    fn pattern(id: &str, prefix: &str, suffixes: &[&str], allow_suffix_to_value: bool) -> Pattern {
        Pattern {
            id: id.to_string(),
            prefix: Some(prefix.to_string()),
            rules: suffixes.iter().map(|s| SuffixRule { suffix: (*s).to_string() }).collect(),
            allow_suffix_to_value,
        }
    }

    Catalog::new(vec![
        pattern("BorderColor", ".Bdc-", &[], true),
        pattern("BgColor", ".Bgc-", &[], true),
        pattern("Color", ".C-", &[], true),
        pattern("Display", ".D-", &["n", "b", "f", "i", "ib", "tb", "tbc"], false),
        pattern("Float", ".Fl-", &["n", "start", "end"], false),
        pattern("FontSize", ".Fz-", &[], true),
        pattern("FontWeight", ".Fw-", &["n", "b"], false),
        pattern("Height", ".H-", &["a"], true),
        pattern("Margin", ".M-", &["a"], true),
        pattern("MarginTop", ".Mt-", &["a"], true),
        pattern("MarginBottom", ".Mb-", &["a"], true),
        pattern("Padding", ".P-", &[], true),
        pattern("Position", ".Pos-", &["a", "f", "r", "s", "st"], false),
        pattern("TextAlign", ".Ta-", &["c", "e", "j", "s", "start", "end"], false),
        pattern("Visibility", ".V-", &["h", "v", "c"], false),
        pattern("Width", ".W-", &["a"], true),
        pattern("ZIndex", ".Z-", &["a"], true),
    ])
}
