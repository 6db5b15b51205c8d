//! Nested translation catalog.
//!
//! A catalog is a tree of string-keyed nodes whose leaves are translated
//! strings. Locale files are parsed into `serde_json::Value` and converted
//! into a [`Catalog`] once; after that the tree is read-only.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Separator between segments of a lookup key.
pub const KEY_SEPARATOR: char = '.';

/// A translation catalog: either a leaf string or a node of child catalogs.
///
/// JSON values map onto the tree as follows:
///
/// - strings become [`Catalog::Leaf`]
/// - objects become [`Catalog::Node`]
/// - arrays become nodes keyed by index (`"0"`, `"1"`, ...), so keys such as
///   `faq.items.0.question` resolve through them
/// - numbers, booleans and null can never resolve to a translation and are
///   dropped
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum Catalog {
    Leaf(String),
    Node(BTreeMap<String, Catalog>),
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Catalog {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Catalog::Leaf(s),
            other => Catalog::Node(children(other)),
        }
    }
}

fn children(value: Value) -> BTreeMap<String, Catalog> {
    match value {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, val)| convert_child(val).map(|c| (key, c)))
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, val)| convert_child(val).map(|c| (index.to_string(), c)))
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn convert_child(value: Value) -> Option<Catalog> {
    match value {
        Value::String(s) => Some(Catalog::Leaf(s)),
        v @ (Value::Object(_) | Value::Array(_)) => Some(Catalog::Node(children(v))),
        Value::Number(_) | Value::Bool(_) | Value::Null => None,
    }
}

impl Catalog {
    /// An empty node.
    pub fn empty() -> Self {
        Catalog::Node(BTreeMap::new())
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Catalog::Leaf(_) => false,
            Catalog::Node(map) => map.is_empty(),
        }
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Catalog::Leaf(s) => Some(s),
            Catalog::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&BTreeMap<String, Catalog>> {
        match self {
            Catalog::Leaf(_) => None,
            Catalog::Node(map) => Some(map),
        }
    }

    /// Descend through the tree following the `.`-separated segments of `key`.
    ///
    /// Returns `None` as soon as a segment is absent or a leaf is reached
    /// before the last segment.
    pub fn get(&self, key: &str) -> Option<&Catalog> {
        key.split(KEY_SEPARATOR)
            .try_fold(self, |cursor, segment| match cursor {
                Catalog::Node(map) => map.get(segment),
                Catalog::Leaf(_) => None,
            })
    }

    /// Resolve `key` to a leaf string.
    pub fn leaf(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Catalog::as_leaf)
    }

    /// Deep-merge `other` into `self`.
    ///
    /// Nodes merge recursively; in every other combination the value from
    /// `other` replaces the existing one.
    pub fn merge(&mut self, other: Catalog) {
        match (self, other) {
            (Catalog::Node(ours), Catalog::Node(theirs)) => {
                for (key, value) in theirs {
                    match ours.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            ours.insert(key, value);
                        }
                    }
                }
            }
            (slot, other) => *slot = other,
        }
    }

    /// Merge `catalog` under the nested path given by `namespace`.
    ///
    /// An empty namespace merges at the root. A leaf sitting on the path is
    /// replaced by a node.
    pub fn insert_at(&mut self, namespace: &[&str], catalog: Catalog) {
        let Some((first, rest)) = namespace.split_first() else {
            self.merge(catalog);
            return;
        };

        if let Catalog::Leaf(_) = self {
            *self = Catalog::empty();
        }
        if let Catalog::Node(map) = self {
            map.entry((*first).to_string())
                .or_insert_with(Catalog::empty)
                .insert_at(rest, catalog);
        }
    }

    /// Every leaf with its full dotted key, sorted by key.
    pub fn flatten(&self) -> BTreeMap<String, &str> {
        let mut result = BTreeMap::new();
        flatten_into(self, None, &mut result);
        result
    }

    /// Number of leaves in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Catalog::Leaf(_) => 1,
            Catalog::Node(map) => map.values().map(Catalog::leaf_count).sum(),
        }
    }
}

/// `prefix` is `None` at the root so that an empty segment below it still
/// gets its own separator.
fn flatten_into<'a>(
    catalog: &'a Catalog,
    prefix: Option<String>,
    result: &mut BTreeMap<String, &'a str>,
) {
    match catalog {
        Catalog::Leaf(value) => {
            result.insert(prefix.unwrap_or_default(), value.as_str());
        }
        Catalog::Node(map) => {
            for (key, child) in map {
                let child_prefix = match &prefix {
                    None => key.clone(),
                    Some(prefix) => format!("{}{}{}", prefix, KEY_SEPARATOR, key),
                };
                flatten_into(child, Some(child_prefix), result);
            }
        }
    }
}
