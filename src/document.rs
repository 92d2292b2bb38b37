//! Ordered documents and their nodes.
//!
//! A [`Document`] is the root of every MSF text and of every nested `{ ... }`
//! object. It maps keys to [`Node`]s and keeps them in insertion order, which
//! is the order the serializer writes them back out. The map is an
//! [`IndexMap`], so assigning an existing key replaces the value in place.
//!
//! ## Examples
//!
//! ```rust
//! use serde_msf::{Document, Value};
//!
//! let mut doc = Document::new();
//! doc.set("name", "Alice").unwrap();
//! doc.set("age", 30).unwrap();
//!
//! assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["name", "age"]);
//! assert_eq!(doc.get::<i64>("age").unwrap(), 30);
//! assert_eq!(doc.get::<&str>("name").unwrap(), "Alice");
//! ```

use crate::value::FromValue;
use crate::{Error, Result, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Returns `true` if `key` can be written unquoted on the left of `=`.
///
/// A key starts with `_` or an ASCII letter and continues with `_`, `.`,
/// ASCII letters or digits, so dotted paths such as `window.size` are keys.
///
/// # Examples
///
/// ```rust
/// use serde_msf::is_valid_key;
///
/// assert!(is_valid_key("window.size"));
/// assert!(is_valid_key("_private1"));
/// assert!(!is_valid_key("1st"));
/// assert!(!is_valid_key("with-dash"));
/// assert!(!is_valid_key(""));
/// ```
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch == '_' || ch == '.' || ch.is_ascii_alphanumeric())
}

/// A single `key = value;` entry of a [`Document`].
///
/// The key is fixed when the node is created; only the owning document can
/// replace the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    key: String,
    value: Value,
}

impl Node {
    pub(crate) fn new(key: String, value: Value) -> Self {
        Node { key, value }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the node, returning its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    fn replace(&mut self, value: Value) -> Value {
        std::mem::replace(&mut self.value, value)
    }
}

/// Canonical `key = value;` line, newline included.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::node_to_string(self))
    }
}

/// An ordered map of keys to [`Node`]s.
///
/// Two documents are equal when they hold equal nodes in the same order.
///
/// # Examples
///
/// ```rust
/// use serde_msf::Document;
///
/// let mut doc = Document::new();
/// doc.set("first", 1).unwrap();
/// doc.set("second", 2).unwrap();
/// doc.set("first", 3).unwrap();
///
/// // Overwriting keeps the original position
/// let keys: Vec<_> = doc.keys().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// assert_eq!(doc.get::<i64>("first").unwrap(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    nodes: IndexMap<String, Node>,
}

impl Document {
    /// Creates an empty `Document`.
    #[must_use]
    pub fn new() -> Self {
        Document {
            nodes: IndexMap::new(),
        }
    }

    /// Creates an empty `Document` with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document {
            nodes: IndexMap::with_capacity(capacity),
        }
    }

    /// Assigns `value` to `key`, returning the value it replaced.
    ///
    /// A new key is appended after the existing ones; an existing key keeps
    /// its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` does not satisfy [`is_valid_key`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_msf::{Document, Value};
    ///
    /// let mut doc = Document::new();
    /// assert_eq!(doc.set("key", 42).unwrap(), None);
    /// assert_eq!(doc.set("key", 43).unwrap(), Some(Value::Integer(42)));
    /// assert!(doc.set("not a key", 1).is_err());
    /// ```
    pub fn set<K, V>(&mut self, key: K, value: V) -> Result<Option<Value>>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let key = key.into();
        if !is_valid_key(&key) {
            return Err(Error::invalid_key(&key));
        }
        Ok(self.insert(key, value.into()))
    }

    /// Assignment for keys already checked by the tokenizer/parser.
    pub(crate) fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        match self.nodes.get_mut(&key) {
            Some(node) => Some(node.replace(value)),
            None => {
                self.nodes.insert(key.clone(), Node::new(key, value));
                None
            }
        }
    }

    /// Looks up `key` and converts its value to `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingKey`] if the document has no such key
    /// - [`Error::TypeMismatch`] if the stored variant is not the one `T` reads
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_msf::{parse, Document};
    ///
    /// let doc = parse("{ a = { b = 1; }; name = \"x\"; }").unwrap();
    /// let inner: &Document = doc.get("a").unwrap();
    /// assert_eq!(inner.get::<i64>("b").unwrap(), 1);
    /// assert!(doc.get::<i64>("name").unwrap_err().is_type_mismatch());
    /// ```
    pub fn get<'a, T>(&'a self, key: &str) -> Result<T>
    where
        T: FromValue<'a>,
    {
        let value = self.value(key).ok_or_else(|| Error::missing_key(key))?;
        T::from_value(value).map_err(|err| err.at_key(key))
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.nodes.get(key).map(Node::value)
    }

    /// Returns the node stored under `key`, if any.
    #[must_use]
    pub fn node(&self, key: &str) -> Option<&Node> {
        self.nodes.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    /// Returns the number of nodes in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> indexmap::map::Values<'_, String, Node> {
        self.nodes.values()
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.nodes.values().map(|node| (node.key(), node.value()))
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.nodes().eq(other.nodes())
    }
}

impl Eq for Document {}

/// Canonical MSF text of the document.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize(self))
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl IntoIterator for Document {
    type Item = Node;
    type IntoIter = indexmap::map::IntoValues<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_values()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = indexmap::map::Values<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.values()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error as _, Unexpected};

        match Value::deserialize(deserializer)? {
            Value::Object(doc) => Ok(doc),
            other => Err(D::Error::invalid_type(
                Unexpected::Other(other.type_name()),
                &"an MSF document",
            )),
        }
    }
}
