//! Field extraction helpers for untyped JSON mappings.
//!
//! Both the requirement parser and prompt construction read loosely-typed
//! mappings (parsed JSON or YAML) and reject wrong shapes with field-specific
//! errors. The extraction rules live here so the two boundaries stay
//! consistent:
//!
//! - Required text must be present, non-null, and a string.
//! - Optional text treats null the same as absent.
//! - Sequences of text must be arrays whose every element is a string;
//!   a present-but-null sequence is a shape error, not an empty list.
//! - Mappings default to empty when absent or null.
//!
//! Elements are never coerced: a number where a string is expected fails.

use crate::error::ValidationError;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Human-readable name for a JSON value kind, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Interpret a value as a top-level mapping.
pub fn as_mapping(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or(ValidationError::NotAMapping {
        found: value_kind(value),
    })
}

/// Extract a required, non-empty text field.
pub fn require_text(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let text = require_text_allow_empty(map, field)?;
    if text.is_empty() {
        return Err(ValidationError::EmptyText { field });
    }
    Ok(text)
}

/// Extract a required text field, allowing the empty string.
pub fn require_text_allow_empty(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    match map.get(field) {
        None => Err(ValidationError::MissingField { field }),
        Some(Value::Null) => Err(ValidationError::NullField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::ExpectedText { field }),
    }
}

/// Extract an optional text field. Null is treated the same as absent.
pub fn optional_text(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::ExpectedText { field }),
    }
}

/// Extract an optional sequence-of-text field. Absent means empty; a present
/// value must be an array of strings (null is a shape error).
pub fn optional_text_sequence(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, ValidationError> {
    let items = match map.get(field) {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::ExpectedTextSequence { field }),
    };

    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => result.push(s.clone()),
            _ => return Err(ValidationError::NonTextElement { field, index }),
        }
    }
    Ok(result)
}

/// Extract an optional mapping field. Absent and null both mean empty.
pub fn optional_mapping(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<BTreeMap<String, Value>, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(BTreeMap::new()),
        Some(Value::Object(entries)) => Ok(entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()),
        Some(_) => Err(ValidationError::ExpectedMapping { field }),
    }
}
