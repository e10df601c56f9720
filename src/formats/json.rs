//! Compact JSON format handler
//!
//! The document is turned into a `serde_json::Value` first so the `@`
//! markers quick-xml needs on attribute names can be dropped; in JSON an
//! attribute and a child element are both plain keys.

use crate::errors::MapperError;
use crate::models_po::Document;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

const INDENT: &[u8] = b"   ";

/// Serialize a document as indented JSON, then strip every line break so
/// the result fits on one line.
pub fn encode_compact(doc: &Document) -> Result<Vec<u8>, MapperError> {
    let value = serde_json::to_value(doc).map_err(|e| {
        MapperError::Serialization(format!("Failed to convert document to JSON: {}", e))
    })?;
    let value = strip_attribute_markers(value);

    let mut output = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut output, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer).map_err(|e| {
        MapperError::Serialization(format!("Failed to write document as JSON: {}", e))
    })?;

    // String values are escaped, so every raw line break here is layout.
    output.retain(|b| *b != b'\n' && *b != b'\r');
    Ok(output)
}

fn strip_attribute_markers(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| {
                    let key = key.strip_prefix('@').map(str::to_string).unwrap_or(key);
                    (key, strip_attribute_markers(v))
                })
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(strip_attribute_markers).collect())
        }
        other => other,
    }
}
