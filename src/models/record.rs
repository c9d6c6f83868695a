//! Remote record types and the normalized row they project into

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One resource as returned by the asset-directory API.
///
/// The API wraps every certificate and profile in the same envelope: an
/// opaque id, a resource kind, and a bag of public attributes whose exact
/// shape differs per kind. Attributes are kept as raw JSON and never
/// mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// Named-attribute access over a source record.
///
/// Source records come in two shapes: typed API resources and plain
/// string-keyed maps. Both project into the same attribute mapping so the
/// normalizer never depends on the concrete shape.
pub trait RecordAttributes {
    /// The record's public attributes, in source order.
    fn attributes(&self) -> Map<String, Value>;
}

impl RecordAttributes for ApiResource {
    fn attributes(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        for (key, value) in &self.attributes {
            map.insert(key.clone(), value.clone());
        }
        map
    }
}

impl RecordAttributes for Map<String, Value> {
    fn attributes(&self) -> Map<String, Value> {
        self.clone()
    }
}

/// A normalized, redaction-safe view of one remote record.
///
/// Keys are snake_case strings; values are the record's raw JSON values.
/// Immutable after creation; the classifier and filters only read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedRow(Map<String, Value>);

impl NormalizedRow {
    pub(crate) fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The attribute as a string slice, when it holds a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
