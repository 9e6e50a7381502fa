/*!
JSON text codec for checkpoint payloads.

All three backends store `state` and `config` as JSON-encoded text columns.
This module is the single place that encoding/decoding happens, so every
backend applies identical JSON semantics: key order is irrelevant, there are
no custom type tags, and an absent `config` is the literal text `"null"`.

This module intentionally does NOT perform I/O.
*/

use serde_json::Value;

use crate::error::{Result, StoreError};

/// Text stored in the `config` column when the caller supplied no config.
pub const ABSENT: &str = "null";

/// Encode a required payload (`state`) to JSON text.
pub fn encode(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|source| StoreError::Serialization { source })
}

/// Encode an optional payload (`config`) to JSON text, defaulting to the
/// serialized representation of "absent".
pub fn encode_optional(value: Option<&Value>) -> Result<String> {
    match value {
        Some(value) => encode(value),
        None => Ok(ABSENT.to_string()),
    }
}

/// Decode a required payload column. Failure means the row is corrupt and is
/// reported as [`StoreError::Deserialization`], never as "not found".
pub fn decode(text: &str, column: &'static str, id: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| StoreError::Deserialization {
        column,
        id: id.to_string(),
        source,
    })
}

/// Decode an optional payload column. JSON `null` round-trips as `None`, so a
/// checkpoint stored without config is retrieved as "no config", not an error.
pub fn decode_optional(text: &str, column: &'static str, id: &str) -> Result<Option<Value>> {
    match decode(text, column, id)? {
        Value::Null => Ok(None),
        value => Ok(Some(value)),
    }
}
