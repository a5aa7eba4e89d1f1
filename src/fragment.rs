//! Configuration fragments.
//!
//! Resolving one class name yields a [`Fragment`]: a partial, nested mapping
//! from pattern id to the configuration that class contributes. Fragments are
//! folded together by the merger and finally converted to a
//! [`serde_json::Value`] so caller configuration can be overlaid on top.
//!
//! ```text
//! "D-b"    -> { Display: { b: true } }
//! "M-10px" -> { Margin:  { custom: [{suffix: "10px", values: ["10px"]}] } }
//! ```
//!
//! Merge semantics: suffix-boolean maps are unioned (no key ever removed);
//! `custom` lists are concatenated, not deduplicated. Callers relying on
//! exact-once custom entries must dedupe upstream.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// A caller- or auto-declared mapping from an unenumerated suffix to one or
/// more concrete values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEntry {
    pub suffix: String,
    pub values: Vec<String>,
}

impl CustomEntry {
    /// Entry whose value is the suffix text itself.
    pub fn suffix_as_value(suffix: &str) -> Self {
        CustomEntry { suffix: suffix.to_string(), values: vec![suffix.to_string()] }
    }
}

/// Per-pattern slice of a fragment: enumerated suffixes that resolved to
/// `true`, plus custom entries in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternConfig {
    suffixes: BTreeMap<String, bool>,
    custom: Vec<CustomEntry>,
}

impl PatternConfig {
    pub fn suffixes(&self) -> &BTreeMap<String, bool> {
        &self.suffixes
    }

    pub fn custom(&self) -> &[CustomEntry] {
        &self.custom
    }
}

/// The partial configuration produced by resolving class names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    entries: BTreeMap<String, PatternConfig>,
}

impl Fragment {
    /// Create an empty fragment.
    pub fn empty() -> Self {
        Fragment::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fragment with a single enumerated suffix set to `true`.
    pub fn with_suffix(pattern_id: &str, suffix: &str) -> Self {
        let mut entry = PatternConfig::default();
        entry.suffixes.insert(suffix.to_string(), true);
        let mut entries = BTreeMap::new();
        entries.insert(pattern_id.to_string(), entry);
        Fragment { entries }
    }

    /// Fragment with a single custom entry.
    pub fn with_custom(pattern_id: &str, custom: CustomEntry) -> Self {
        let mut entry = PatternConfig::default();
        entry.custom.push(custom);
        let mut entries = BTreeMap::new();
        entries.insert(pattern_id.to_string(), entry);
        Fragment { entries }
    }

    /// Per-pattern slice, if this fragment contributes to `pattern_id`.
    pub fn entry(&self, pattern_id: &str) -> Option<&PatternConfig> {
        self.entries.get(pattern_id)
    }

    /// Deep key-wise union of `other` into `self`.
    ///
    /// Suffix maps are unioned; `custom` lists are concatenated in order.
    pub fn merge(&mut self, other: Fragment) {
        for (id, incoming) in other.entries {
            let entry = self.entries.entry(id).or_default();
            entry.suffixes.extend(incoming.suffixes);
            entry.custom.extend(incoming.custom);
        }
    }

    /// Convert into the JSON object shape consumed by the generator:
    /// `{ <id>: { <suffix>: true, ..., "custom": [{suffix, values}, ...] } }`.
    pub fn into_value(self) -> Value {
        let mut root = Map::new();
        for (id, entry) in self.entries {
            let mut obj = Map::new();
            for (suffix, on) in entry.suffixes {
                obj.insert(suffix, Value::Bool(on));
            }
            if !entry.custom.is_empty() {
                let list = entry
                    .custom
                    .into_iter()
                    .map(|c| {
                        let mut e = Map::new();
                        e.insert("suffix".to_string(), Value::String(c.suffix));
                        e.insert(
                            "values".to_string(),
                            Value::Array(c.values.into_iter().map(Value::String).collect()),
                        );
                        Value::Object(e)
                    })
                    .collect();
                obj.insert("custom".to_string(), Value::Array(list));
            }
            root.insert(id, Value::Object(obj));
        }
        Value::Object(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_unions_disjoint_suffixes() {
        let mut a = Fragment::with_suffix("Display", "b");
        a.merge(Fragment::with_suffix("Display", "n"));
        let entry = a.entry("Display").unwrap();
        assert_eq!(entry.suffixes().len(), 2);
        assert_eq!(entry.suffixes().get("b"), Some(&true));
        assert_eq!(entry.suffixes().get("n"), Some(&true));
    }

    #[test]
    fn merge_is_idempotent_for_boolean_keys() {
        let mut a = Fragment::with_suffix("Display", "b");
        let same = a.clone();
        a.merge(same);
        assert_eq!(a, Fragment::with_suffix("Display", "b"));
    }

    #[test]
    fn merge_concatenates_custom_entries() {
        // Concatenation without dedupe is the pinned behavior.
        let mut a = Fragment::with_custom("Margin", CustomEntry::suffix_as_value("10px"));
        a.merge(Fragment::with_custom("Margin", CustomEntry::suffix_as_value("10px")));
        a.merge(Fragment::with_custom("Margin", CustomEntry::suffix_as_value("2em")));
        let entry = a.entry("Margin").unwrap();
        assert_eq!(entry.custom().len(), 3);
        assert_eq!(entry.custom()[0].suffix, "10px");
        assert_eq!(entry.custom()[1].suffix, "10px");
        assert_eq!(entry.custom()[2].suffix, "2em");
    }

    #[test]
    fn into_value_builds_generator_shape() {
        let mut fragment = Fragment::with_suffix("Display", "b");
        fragment.merge(Fragment::with_custom("Margin", CustomEntry::suffix_as_value("10px")));
        assert_eq!(
            fragment.into_value(),
            json!({
                "Display": { "b": true },
                "Margin": { "custom": [ { "suffix": "10px", "values": ["10px"] } ] }
            })
        );
    }
}
