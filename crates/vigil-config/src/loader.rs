//! Typed extraction helpers over the generic configuration map.
//!
//! Checkers pull their options out of a [`ConfigMap`] with these helpers;
//! a missing key or a value of the wrong JSON type is an initialization
//! error, never a default.

use serde_json::Value;

use vigil_common::{Error, Result};

use crate::checker::ConfigMap;

/// Extract a required string option.
pub fn config_string(conf: &ConfigMap, key: &str) -> Result<String> {
    let value = required(conf, key)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| type_mismatch(key, "string", value))
}

/// Extract a required boolean option.
pub fn config_bool(conf: &ConfigMap, key: &str) -> Result<bool> {
    let value = required(conf, key)?;
    value
        .as_bool()
        .ok_or_else(|| type_mismatch(key, "bool", value))
}

fn required<'a>(conf: &'a ConfigMap, key: &str) -> Result<&'a Value> {
    conf.get(key).ok_or_else(|| Error::ConfigMissing {
        key: key.to_string(),
    })
}

fn type_mismatch(key: &str, expected: &'static str, value: &Value) -> Error {
    Error::ConfigTypeMismatch {
        key: key.to_string(),
        expected,
        actual: json_type_name(value).to_string(),
    }
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
