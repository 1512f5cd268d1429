//! Lenient readers for server payloads.
//!
//! The API makes no schema promises beyond "mapping" or "array", so record
//! fields accept any scalar and sequences drop elements that are not
//! mappings instead of failing the whole payload.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

/// Any scalar as text; `null`, arrays and objects read as empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Like [`text`], but blank strings are absent.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Value::deserialize(deserializer)?;
  Ok(scalar_text(value).filter(|s| !s.trim().is_empty()))
}

fn scalar_text(value: Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    Value::Null | Value::Array(_) | Value::Object(_) => None,
  }
}

/// Coerce `payload` into a sequence of records, preserving server order.
///
/// A non-array payload yields an empty sequence.
pub fn records<T: DeserializeOwned>(payload: Value, kind: &'static str) -> Vec<T> {
  let Value::Array(items) = payload else {
    debug!(kind, "payload is not an array; treating as empty");
    return Vec::new();
  };

  items
    .into_iter()
    .enumerate()
    .filter_map(|(index, item)| {
      // Structs also deserialize from sequences, so check the shape first.
      if !item.is_object() {
        debug!(kind, index, "skipping non-object element");
        return None;
      }
      match serde_json::from_value(item) {
        Ok(record) => Some(record),
        Err(e) => {
          debug!(kind, index, error = %e, "skipping unreadable element");
          None
        }
      }
    })
    .collect()
}
