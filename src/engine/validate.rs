//! Caller-configuration validation.
//!
//! The pipeline refuses to run against a caller configuration missing its
//! required top-level shape. Checks run in a fixed order and stop at the
//! first failure; a failure is fatal to the whole invocation.

use serde_json::Value;
use thiserror::Error;

/// Shape violations in caller configuration. The embedded string is the
/// origin of the offending document (e.g. `--config-file`), so messages name
/// a full field path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("`{0}` must be an object")]
    NotAnObject(String),
    #[error("`{0}.config` is required and must be an object")]
    ConfigBlock(String),
    #[error("`{0}.config.namespace` is required and must be a non-empty string")]
    Namespace(String),
    #[error("`{0}.config.end` must be either `left` or `right`")]
    End(String),
    #[error("`{0}.config.start` must be either `left` or `right`")]
    Start(String),
}

/// Validate the required top-level shape of caller configuration.
pub fn validate(config: &Value, origin: &str) -> Result<(), ShapeError> {
    let Some(root) = config.as_object() else {
        return Err(ShapeError::NotAnObject(origin.to_string()));
    };
    let Some(block) = root.get("config").and_then(Value::as_object) else {
        return Err(ShapeError::ConfigBlock(origin.to_string()));
    };

    match block.get("namespace").and_then(Value::as_str) {
        Some(namespace) if !namespace.is_empty() => {}
        _ => return Err(ShapeError::Namespace(origin.to_string())),
    }
    if !matches!(block.get("end").and_then(Value::as_str), Some("left" | "right")) {
        return Err(ShapeError::End(origin.to_string()));
    }
    if !matches!(block.get("start").and_then(Value::as_str), Some("left" | "right")) {
        return Err(ShapeError::Start(origin.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_config() {
        let config = json!({ "config": { "namespace": "Atomic", "start": "left", "end": "right" } });
        assert_eq!(validate(&config, "--config"), Ok(()));
    }

    #[test]
    fn accepts_extra_fields_alongside_config() {
        let config = json!({
            "config": { "namespace": "#atomic", "start": "right", "end": "left", "rtl": true },
            "Color": { "custom": [] }
        });
        assert_eq!(validate(&config, "--config"), Ok(()));
    }

    #[test]
    fn rejects_non_object_root() {
        assert_eq!(validate(&json!([1, 2]), "--config"), Err(ShapeError::NotAnObject("--config".into())));
        assert_eq!(validate(&json!("x"), "--config"), Err(ShapeError::NotAnObject("--config".into())));
    }

    #[test]
    fn rejects_missing_or_non_object_config_block() {
        assert_eq!(validate(&json!({}), "--config"), Err(ShapeError::ConfigBlock("--config".into())));
        assert_eq!(
            validate(&json!({ "config": "ns" }), "--config"),
            Err(ShapeError::ConfigBlock("--config".into()))
        );
    }

    #[test]
    fn rejects_missing_or_empty_namespace() {
        let missing = json!({ "config": { "start": "left", "end": "right" } });
        assert_eq!(validate(&missing, "--config"), Err(ShapeError::Namespace("--config".into())));
        let empty = json!({ "config": { "namespace": "", "start": "left", "end": "right" } });
        assert_eq!(validate(&empty, "--config"), Err(ShapeError::Namespace("--config".into())));
    }

    #[test]
    fn rejects_bad_direction_values() {
        let bad_end = json!({ "config": { "namespace": "A", "start": "left", "end": "up" } });
        assert_eq!(validate(&bad_end, "--config"), Err(ShapeError::End("--config".into())));
        let bad_start = json!({ "config": { "namespace": "A", "start": 7, "end": "right" } });
        assert_eq!(validate(&bad_start, "--config"), Err(ShapeError::Start("--config".into())));
    }

    #[test]
    fn end_is_checked_before_start() {
        let both_bad = json!({ "config": { "namespace": "A", "start": "up", "end": "down" } });
        assert_eq!(validate(&both_bad, "--config"), Err(ShapeError::End("--config".into())));
    }
}
