//! Configuration merging.
//!
//! Two merge operations with deliberately different bias:
//!
//! - [`merge_fragments`]: fold per-class fragments into one generated
//!   configuration (key-wise union; see `Fragment::merge` for the exact
//!   semantics).
//! - [`overlay`]: put caller configuration on top of the generated one.
//!   Object-object collisions merge recursively; every other collision
//!   (scalar, array, or mixed shapes) takes the caller value wholesale, so
//!   any path present in the caller document survives verbatim.

use serde_json::Value;

use crate::fragment::Fragment;

/// Fold fragments into one, in iteration order.
pub fn merge_fragments<I>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = Fragment>,
{
    let mut acc = Fragment::empty();
    for fragment in fragments {
        acc.merge(fragment);
    }
    acc
}

/// Right-biased deep merge of `caller` over `generated`.
pub fn overlay(generated: Value, caller: &Value) -> Value {
    match (generated, caller) {
        (Value::Object(mut merged), Value::Object(overrides)) => {
            for (key, value) in overrides {
                let entry = match merged.remove(key) {
                    Some(existing) => overlay(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), entry);
            }
            Value::Object(merged)
        }
        (_, replacement) => replacement.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::CustomEntry;
    use serde_json::json;

    #[test]
    fn merge_fragments_folds_in_order() {
        let merged = merge_fragments(vec![
            Fragment::with_suffix("Display", "b"),
            Fragment::with_suffix("Display", "n"),
            Fragment::with_custom("Margin", CustomEntry::suffix_as_value("10px")),
        ]);
        assert_eq!(
            merged.into_value(),
            json!({
                "Display": { "b": true, "n": true },
                "Margin": { "custom": [ { "suffix": "10px", "values": ["10px"] } ] }
            })
        );
    }

    #[test]
    fn overlay_is_right_biased_at_every_caller_path() {
        let generated = json!({
            "config": { "namespace": "generated", "start": "left" },
            "Display": { "b": true }
        });
        let caller = json!({
            "config": { "namespace": "mine" },
            "Color": { "custom": [ { "suffix": "blue", "values": ["#00f"] } ] }
        });
        assert_eq!(
            overlay(generated, &caller),
            json!({
                "config": { "namespace": "mine", "start": "left" },
                "Display": { "b": true },
                "Color": { "custom": [ { "suffix": "blue", "values": ["#00f"] } ] }
            })
        );
    }

    #[test]
    fn overlay_replaces_arrays_and_mismatched_shapes_wholesale() {
        let generated = json!({
            "Margin": { "custom": [ { "suffix": "10px", "values": ["10px"] } ] },
            "Display": { "b": true }
        });
        let caller = json!({
            "Margin": { "custom": [ { "suffix": "2em", "values": ["2em"] } ] },
            "Display": "off"
        });
        assert_eq!(
            overlay(generated, &caller),
            json!({
                "Margin": { "custom": [ { "suffix": "2em", "values": ["2em"] } ] },
                "Display": "off"
            })
        );
    }

    #[test]
    fn overlay_keeps_generated_paths_absent_from_caller() {
        let generated = json!({ "Display": { "b": true } });
        let overlaid = overlay(generated.clone(), &json!({}));
        assert_eq!(overlaid, generated);
    }
}
