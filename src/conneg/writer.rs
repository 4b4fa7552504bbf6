//! JSON body writing
//!
//! Serializes a result value to a single compact JSON document, honoring
//! the result's serializer options. A null value serializes to the
//! literal `null` and a string to a quoted JSON string; neither is ever
//! shortened to an empty body.

use crate::conneg::error::Result;
use crate::conneg::result::{PropertyNaming, SerializerOptions};
use serde_json::Value;

/// Serialize a value to a compact JSON document
///
/// # Arguments
/// - `value`: The value to serialize
/// - `options`: Custom serializer options; `None` uses the default
///   convention (property names preserved as declared)
///
/// # Returns
/// - `Ok(String)` with the JSON text
/// - `Err` if serialization fails (unexpected for the value shapes in
///   scope)
pub fn write_json(value: &Value, options: Option<&SerializerOptions>) -> Result<String> {
    let naming = options.map_or(PropertyNaming::Preserve, |o| o.naming);

    let json = match naming {
        PropertyNaming::Preserve => serde_json::to_string(value)?,
        PropertyNaming::Lowercase => serde_json::to_string(&rename_keys(value))?,
    };

    Ok(json)
}

// Rebuilds the value tree with lower-cased object keys. serde_json maps
// order keys lexicographically, so output stays deterministic.
fn rename_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.to_lowercase(), rename_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(rename_keys).collect()),
        other => other.clone(),
    }
}
