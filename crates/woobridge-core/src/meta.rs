//! Meta-data read-modify-write helpers.
//!
//! Store entities carry an ordered `meta_data` sequence (keys not
//! guaranteed unique); WordPress posts carry a flat `meta` map. Neither
//! API offers a partial-update primitive, so every mutation rewrites
//! the whole field on the parent entity.

use serde_json::{json, Map, Value};

/// Extracts the `meta_data` sequence of a store entity.
pub fn sequence_of(entity: &Value) -> Vec<Value> {
    entity
        .get("meta_data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Extracts the `meta` map of a content entity.
pub fn map_of(entity: &Value) -> Map<String, Value> {
    entity
        .get("meta")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Replaces the value of the first entry matching `key`, preserving its
/// position and any upstream-assigned id; appends a `{key, value}` entry
/// when no key matches. All other entries are untouched.
pub fn upsert_entry(sequence: &mut Vec<Value>, key: &str, value: Value) {
    let position = sequence
        .iter()
        .position(|entry| entry.get("key").and_then(Value::as_str) == Some(key));
    match position {
        Some(index) => {
            if let Some(entry) = sequence[index].as_object_mut() {
                entry.insert("value".to_string(), value);
            }
        }
        None => sequence.push(json!({ "key": key, "value": value })),
    }
}

/// Removes every entry matching `key`, preserving the order of the rest.
pub fn remove_entries(sequence: &mut Vec<Value>, key: &str) {
    sequence.retain(|entry| entry.get("key").and_then(Value::as_str) != Some(key));
}

/// All entries whose key matches (keys are not unique upstream).
pub fn entries_for_key(sequence: &[Value], key: &str) -> Vec<Value> {
    sequence
        .iter()
        .filter(|entry| entry.get("key").and_then(Value::as_str) == Some(key))
        .cloned()
        .collect()
}
