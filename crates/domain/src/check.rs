//! Structural checks over JSON payloads.
//!
//! Field-presence checks use exact key membership; error-text matching is
//! case-insensitive substring containment, tolerant of wording changes in
//! the server's messages.

use serde_json::Value;

/// Returns the subset of `keys` absent from the JSON object `value`.
///
/// A non-object value is missing every key.
#[must_use]
pub fn missing_keys<'a>(value: &Value, keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter()
        .copied()
        .filter(|key| value.get(key).is_none())
        .collect()
}

/// Returns true if every key in `keys` is present on the JSON object.
#[must_use]
pub fn has_keys(value: &Value, keys: &[&str]) -> bool {
    missing_keys(value, keys).is_empty()
}

/// Case-insensitive substring containment.
#[must_use]
pub fn mentions(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(&needle.to_lowercase())
}
