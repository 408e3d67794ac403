//! Translation bundles: a tree of string leaves addressed by dotted key paths.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// One node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// A translated string (may contain markup).
    Leaf(String),
    /// A nested group of keys.
    Map(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    /// Convert a JSON value into a node.
    ///
    /// Numbers and booleans keep their JSON text, arrays are keyed by
    /// index, and `null` has no node at all.
    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Leaf(s)),
            Value::Bool(b) => Some(Self::Leaf(b.to_string())),
            Value::Number(n) => Some(Self::Leaf(n.to_string())),
            Value::Array(items) => Some(Self::Map(
                items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, v)| Self::from_json(v).map(|node| (i.to_string(), node)))
                    .collect(),
            )),
            Value::Object(obj) => Some(Self::Map(
                obj.into_iter()
                    .filter_map(|(k, v)| Self::from_json(v).map(|node| (k, node)))
                    .collect(),
            )),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Self::Leaf(s) => Value::String(s.clone()),
            Self::Map(map) => {
                Value::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
            }
        }
    }

    fn count_leaves(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Map(map) => map.values().map(Self::count_leaves).sum(),
        }
    }
}

/// A single language's complete tree of translated strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationBundle {
    root: BTreeMap<String, TranslationNode>,
}

impl TranslationBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bundle from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a bundle from a parsed JSON value. The root must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(Self {
                root: obj
                    .into_iter()
                    .filter_map(|(k, v)| TranslationNode::from_json(v).map(|node| (k, node)))
                    .collect(),
            }),
            other => Err(Error::InvalidBundle(format!(
                "bundle root must be an object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Insert a leaf at a dotted key path, creating groups along the way.
    ///
    /// An existing leaf on the path is replaced by a group.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let mut segments = key.split('.').peekable();
        let mut map = &mut self.root;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                map.insert(segment.to_string(), TranslationNode::Leaf(value.into()));
                return;
            }
            let node = map
                .entry(segment.to_string())
                .or_insert_with(|| TranslationNode::Map(BTreeMap::new()));
            if let TranslationNode::Leaf(_) = node {
                *node = TranslationNode::Map(BTreeMap::new());
            }
            map = match node {
                TranslationNode::Map(inner) => inner,
                TranslationNode::Leaf(_) => return,
            };
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Resolve a dotted key path to its string leaf.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        resolve_key(self, key)
    }

    /// Whether the bundle has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of string leaves in the bundle.
    pub fn leaf_count(&self) -> usize {
        self.root.values().map(TranslationNode::count_leaves).sum()
    }
}

/// Resolve a dotted key path against a bundle.
///
/// Resolution succeeds only when every segment names a child of a group
/// and the final segment lands on a leaf. Empty keys and empty segments
/// never resolve.
pub fn resolve_key<'a>(bundle: &'a TranslationBundle, key: &str) -> Option<&'a str> {
    let mut segments = key.split('.');
    let first = segments.next().filter(|s| !s.is_empty())?;
    let mut node = bundle.root.get(first)?;

    for segment in segments {
        if segment.is_empty() {
            return None;
        }
        node = match node {
            TranslationNode::Map(map) => map.get(segment)?,
            TranslationNode::Leaf(_) => return None,
        };
    }

    match node {
        TranslationNode::Leaf(value) => Some(value.as_str()),
        TranslationNode::Map(_) => None,
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<'de> Deserialize<'de> for TranslationBundle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TranslationBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value: serde_json::Map<String, Value> =
            self.root.iter().map(|(k, v)| (k.clone(), v.to_json())).collect();
        value.serialize(serializer)
    }
}
