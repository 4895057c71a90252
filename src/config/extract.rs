//! Coercion of raw JSON values into the shapes the typed lookups return.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ConfigError;

/// Describes the shape of a value for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn invalid_cast(key: &str, expected: &'static str, found: &Value) -> ConfigError {
    ConfigError::InvalidCast {
        key: key.to_string(),
        expected,
        found: value_kind(found),
    }
}

pub(crate) fn into_string(key: &str, value: Value) -> Result<String, ConfigError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(invalid_cast(key, "a string", &other)),
    }
}

/// Numbers are truncated toward zero; out-of-range floats saturate.
pub(crate) fn into_int(key: &str, value: Value) -> Result<i64, ConfigError> {
    match &value {
        Value::Number(n) => Ok(match n.as_i64() {
            Some(i) => i,
            // as_f64 only fails with serde_json's arbitrary_precision feature.
            None => n.as_f64().unwrap_or_default() as i64,
        }),
        other => Err(invalid_cast(key, "a number", other)),
    }
}

/// Returns the strings in stored order.
pub(crate) fn into_strings(key: &str, value: Value) -> Result<Vec<String>, ConfigError> {
    const EXPECTED: &str = "an array of strings";

    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(invalid_cast(key, EXPECTED, &other)),
            })
            .collect(),
        other => Err(invalid_cast(key, EXPECTED, &other)),
    }
}

pub(crate) fn into_deserialized<T: DeserializeOwned>(
    key: &str,
    value: Value,
) -> Result<T, ConfigError> {
    serde_json::from_value(value).map_err(|source| ConfigError::Deserialize {
        key: key.to_string(),
        source,
    })
}
