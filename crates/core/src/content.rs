//! Normalized content data model.
//!
//! The CMS wire format may wrap a payload as `{data: [...]}` or
//! `{data: {...}}`, wrap each item as `{id, attributes: {...}}`, and nest
//! relations under a further `data` key. After normalization a response is
//! one of the three [`Content`] shapes and every item is a flat
//! [`Document`].
//!
//! `Document` accessors take a priority chain of field names (the backend's
//! schema is operator-defined and drifts between `title` and `Title`
//! casings) and treat empty strings as absent, so consuming code states its
//! precedence once and falls back to a real default.

use serde_json::{Map, Value};

/// A normalized response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A collection payload (`{data: [...]}`), items already normalized.
    Many(Vec<Value>),
    /// A single-type payload (`{data: {...}}`), item already normalized.
    Single(Value),
    /// A payload with no `data` wrapper, passed through unchanged.
    Raw(Value),
}

impl Content {
    /// Coerce into a list of documents.
    ///
    /// Collections yield their object items, a single item yields a
    /// one-element list, and a bare array payload is taken as already
    /// normalized. Anything else yields an empty list.
    pub fn into_documents(self) -> Vec<Document> {
        match self {
            Content::Many(items) => items.into_iter().filter_map(Document::from_value).collect(),
            Content::Single(item) => Document::from_value(item).into_iter().collect(),
            Content::Raw(Value::Array(items)) => items.into_iter().filter_map(Document::from_value).collect(),
            Content::Raw(_) => Vec::new(),
        }
    }

    /// Coerce into a single document: the item of a single-type payload,
    /// the first object of a collection, or a bare object payload.
    pub fn into_document(self) -> Option<Document> {
        match self {
            Content::Single(item) => Document::from_value(item),
            Content::Many(items) => items.into_iter().find_map(Document::from_value),
            Content::Raw(raw) => Document::from_value(raw),
        }
    }
}

/// A flat, normalized CMS item: field name to value, with an `id` field
/// when the source item carried one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Wrap a flat field map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a document from a JSON value; non-objects yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying field map.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Raw field access.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The item id, rendered as text (`5` and `"5"` both yield `"5"`).
    pub fn id_text(&self) -> Option<String> {
        match self.0.get("id") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The item id as an integer, when it is one.
    pub fn id_int(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// First non-empty string value along the key chain.
    pub fn text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
    }

    /// First non-empty string value along the key chain, or `default`.
    pub fn text_or(&self, keys: &[&str], default: &str) -> String {
        self.text(keys).unwrap_or(default).to_string()
    }

    /// First boolean value along the key chain.
    pub fn boolean(&self, keys: &[&str]) -> Option<bool> {
        keys.iter().find_map(|key| self.0.get(*key).and_then(Value::as_bool))
    }

    /// First integer value along the key chain.
    pub fn integer(&self, keys: &[&str]) -> Option<i64> {
        keys.iter().find_map(|key| self.0.get(*key).and_then(Value::as_i64))
    }

    /// First array value along the key chain, keeping only its string
    /// elements.
    pub fn string_list(&self, keys: &[&str]) -> Option<Vec<String>> {
        keys.iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_array))
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
    }

    /// A nested object field as a document (a normalized relation or media
    /// entry).
    pub fn document(&self, key: &str) -> Option<Document> {
        match self.0.get(key) {
            Some(Value::Object(map)) => Some(Document(map.clone())),
            _ => None,
        }
    }

    /// A nested array field as documents (a normalized to-many relation or
    /// component list).
    pub fn documents(&self, key: &str) -> Option<Vec<Document>> {
        match self.0.get(key) {
            Some(Value::Array(items)) => {
                Some(items.iter().filter_map(|item| Document::from_value(item.clone())).collect())
            }
            _ => None,
        }
    }
}
