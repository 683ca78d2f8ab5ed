//! Response normalization for the CMS wire format.
//!
//! The backend answers in one of three shapes: `{data: [...]}` for
//! collections, `{data: {...}}` for single types, or a bare value. Items may
//! additionally be wrapped as `{id, attributes: {...}}`, and relation or
//! media fields nest their value under a further `data` key. Normalization
//! collapses all of that into flat items exactly once per response; it
//! never fails and never invents fields.

use dreamnest_core::Content;
use serde_json::{Map, Value};

/// Normalize a raw CMS payload into one of the canonical [`Content`]
/// shapes.
///
/// A payload without a usable `data` field is passed through unchanged as
/// [`Content::Raw`]: it is either already normalized or an unrecognized
/// shape left to the caller.
pub fn normalize_response(payload: Value) -> Content {
    match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => {
                Content::Many(items.into_iter().map(normalize_item).collect())
            }
            Some(value) if is_truthy(&value) => Content::Single(normalize_item(value)),
            Some(value) => {
                // an empty relation-style `{data: null}` stays wrapped
                map.insert("data".to_string(), value);
                Content::Raw(Value::Object(map))
            }
            None => Content::Raw(Value::Object(map)),
        },
        other => Content::Raw(other),
    }
}

/// Normalize a single item: unwrap one level of `attributes` nesting, then
/// recursively normalize any relation fields found under a `data` key.
/// Non-object items pass through untouched.
pub fn normalize_item(item: Value) -> Value {
    match item {
        Value::Object(map) => {
            let mut flat = flatten_attributes(map);
            for value in flat.values_mut() {
                normalize_relation(value);
            }
            Value::Object(flat)
        }
        other => other,
    }
}

/// `{id, attributes: {...}}` becomes `{id, ...attributes}`; other keys on
/// the wrapper are dropped. Items without an `attributes` object are kept
/// as-is.
fn flatten_attributes(mut map: Map<String, Value>) -> Map<String, Value> {
    match map.remove("attributes") {
        Some(Value::Object(attributes)) => {
            let mut flat = Map::new();
            if let Some(id) = map.remove("id") {
                flat.insert("id".to_string(), id);
            }
            flat.extend(attributes);
            flat
        }
        Some(other) => {
            map.insert("attributes".to_string(), other);
            map
        }
        None => map,
    }
}

/// Replace a field value that looks like a wrapped relation
/// (an object with a non-null `data` key) by its normalized form.
fn normalize_relation(value: &mut Value) {
    let wrapped = value
        .as_object()
        .and_then(|map| map.get("data"))
        .is_some_and(is_truthy);

    if wrapped {
        *value = match normalize_response(std::mem::take(value)) {
            Content::Many(items) => Value::Array(items),
            Content::Single(item) => item,
            Content::Raw(raw) => raw,
        };
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
