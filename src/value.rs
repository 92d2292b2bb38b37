//! Dynamic value representation for MSF data.
//!
//! This module provides the [`Value`] enum, the closed set of things a node can
//! hold: integers, text, booleans, lists and nested documents.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_msf::{msf, Value};
//!
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let flag = Value::from(true);
//! let list = Value::from(vec![Value::from(1), Value::from(2)]);
//!
//! let object = msf!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(object.is_object());
//! ```
//!
//! ### Extracting Values
//!
//! Conversions never coerce one variant into another:
//!
//! ```rust
//! use serde_msf::Value;
//! use std::convert::TryFrom;
//!
//! assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
//! assert!(String::try_from(Value::from(42)).is_err());
//! ```

use crate::{Document, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Any value that can appear on the right-hand side of a node.
///
/// # Examples
///
/// ```rust
/// use serde_msf::Value;
///
/// let value = Value::Text("hello".to_string());
/// match &value {
///     Value::Integer(i) => println!("integer {}", i),
///     Value::Text(s) => println!("text {}", s),
///     Value::Boolean(b) => println!("boolean {}", b),
///     Value::List(items) => println!("{} items", items.len()),
///     Value::Object(doc) => println!("{} nodes", doc.len()),
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
    Boolean(bool),
    List(Vec<Value>),
    Object(Document),
}

impl Value {
    /// Name of the variant, as used in [`Error::TypeMismatch`] messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_msf::Value;
    ///
    /// assert_eq!(Value::from(1).type_name(), "integer");
    /// assert_eq!(Value::from("a").type_name(), "text");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Boolean(_) => "boolean",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is text, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_msf::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Document> {
        match self {
            Value::Object(doc) => Some(doc),
            _ => None,
        }
    }
}

/// Canonical MSF text of the value; nested documents span several lines.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::value_to_string(self))
    }
}

/// Borrowing or owning conversion out of a [`Value`], used by
/// [`Document::get`](crate::Document::get).
///
/// Implementations must fail with [`Error::TypeMismatch`] when the variant
/// does not match; no conversion between variants takes place.
pub trait FromValue<'a>: Sized {
    fn from_value(value: &'a Value) -> Result<Self>;
}

fn mismatch(expected: &'static str, value: &Value) -> Error {
    Error::type_mismatch(expected, value.type_name())
}

impl<'a> FromValue<'a> for i64 {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_i64().ok_or_else(|| mismatch("integer", value))
    }
}

impl<'a> FromValue<'a> for bool {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_str().ok_or_else(|| mismatch("text", value))
    }
}

impl<'a> FromValue<'a> for String {
    fn from_value(value: &'a Value) -> Result<Self> {
        <&str>::from_value(value).map(str::to_string)
    }
}

impl<'a> FromValue<'a> for &'a [Value] {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_list().ok_or_else(|| mismatch("list", value))
    }
}

impl<'a> FromValue<'a> for Vec<Value> {
    fn from_value(value: &'a Value) -> Result<Self> {
        <&[Value]>::from_value(value).map(<[Value]>::to_vec)
    }
}

impl<'a> FromValue<'a> for &'a Document {
    fn from_value(value: &'a Value) -> Result<Self> {
        value.as_object().ok_or_else(|| mismatch("object", value))
    }
}

impl<'a> FromValue<'a> for Document {
    fn from_value(value: &'a Value) -> Result<Self> {
        <&Document>::from_value(value).map(Clone::clone)
    }
}

impl<'a> FromValue<'a> for &'a Value {
    fn from_value(value: &'a Value) -> Result<Self> {
        Ok(value)
    }
}

impl<'a> FromValue<'a> for Value {
    fn from_value(value: &'a Value) -> Result<Self> {
        Ok(value.clone())
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(doc) => doc.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer, text, boolean, list or object")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::Integer)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Value::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Value::Text(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut doc = Document::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    doc.set(key, value).map_err(de::Error::custom)?;
                }
                Ok(Value::Object(doc))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(mismatch("integer", &other)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(mismatch("text", &other)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => Ok(items),
            other => Err(mismatch("list", &other)),
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(doc) => Ok(doc),
            other => Err(mismatch("object", &other)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for i64 {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        i64::from_value(value)
    }
}

impl<'a> TryFrom<&'a Value> for bool {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        bool::from_value(value)
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        <&str>::from_value(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<Document> for Value {
    fn from(value: Document) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn test_tryfrom_never_coerces() {
        assert_eq!(i64::try_from(Value::Integer(42)).unwrap(), 42);
        assert!(i64::try_from(Value::Text("42".to_string())).is_err());
        assert!(i64::try_from(Value::Boolean(true)).is_err());

        assert!(bool::try_from(Value::Boolean(false)).is_ok());
        assert!(bool::try_from(Value::Integer(1)).is_err());

        let err = String::try_from(Value::Integer(7)).unwrap_err();
        assert_eq!(err, Error::type_mismatch("text", "integer"));

        let value = Value::from("borrowed");
        assert_eq!(<&str>::try_from(&value).unwrap(), "borrowed");
        assert!(i64::try_from(&value).is_err());
    }

    #[test]
    fn test_from_value_borrows() {
        let value = Value::List(vec![Value::from(1), Value::from("x")]);
        let items = <&[Value]>::from_value(&value).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(<&str>::from_value(&items[1]).unwrap(), "x");
        assert!(<&Document>::from_value(&value).is_err());
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(42u32), Value::Integer(42));
        assert_eq!(Value::from("test"), Value::Text("test".to_string()));
        assert_eq!(
            Value::from("test".to_string()),
            Value::Text("test".to_string())
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from(Vec::<Value>::new()).type_name(), "list");
        assert_eq!(Value::from(Document::new()).type_name(), "object");
        assert_eq!(Value::from(false).type_name(), "boolean");
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Value::from(-15).to_string(), "-15");
        assert_eq!(Value::from("two words").to_string(), "\"two words\"");
        assert_eq!(
            Value::List(vec![Value::from(1), Value::from(true)]).to_string(),
            "[1, true]"
        );
        assert_eq!(Value::List(vec![]).to_string(), "[]");
    }
}
