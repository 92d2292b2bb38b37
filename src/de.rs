//! MSF deserialization into Rust types.
//!
//! Text is first parsed into a [`Document`](crate::Document); the
//! [`Deserializer`] then walks the resulting [`Value`] tree and drives a
//! serde `Visitor`. MSF is self-describing, so every request is answered
//! from the variant actually stored.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_msf::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Window { title: String, size: Vec<u32> }
//!
//! let window: Window = from_str("{ title = \"main\"; size = [800, 600]; }").unwrap();
//! assert_eq!(window, Window { title: "main".to_string(), size: vec![800, 600] });
//! ```
//!
//! ## Enums
//!
//! A unit variant is read from text, any other variant from a document with
//! a single node named after the variant:
//!
//! ```rust
//! use serde_msf::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! enum Shape { Empty, Circle(u32), Rect { w: u32, h: u32 } }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Scene { a: Shape, b: Shape, c: Shape }
//!
//! let scene: Scene = from_str(
//!     "{ a = \"Empty\"; b = { Circle = 4; }; c = { Rect = { w = 1; h = 2; }; }; }",
//! ).unwrap();
//! assert_eq!(scene.c, Shape::Rect { w: 1, h: 2 });
//! ```

use crate::{Document, Error, Result, Value};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// A serde `Deserializer` reading from an owned [`Value`].
pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    pub fn new(value: Value) -> Self {
        Deserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Integer(i) => visitor.visit_i64(i),
            Value::Text(s) => visitor.visit_string(s),
            Value::Boolean(b) => visitor.visit_bool(b),
            Value::List(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            Value::Object(doc) => visitor.visit_map(MapDeserializer::new(doc)),
        }
    }

    /// A stored value is always `Some`; absent struct fields become `None`
    /// through serde's missing-field handling.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Text(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(doc) if doc.len() == 1 => {
                let node = doc
                    .into_iter()
                    .next()
                    .ok_or_else(|| Error::custom("empty enum document"))?;
                let variant = node.key().to_string();
                visitor.visit_enum(EnumDeserializer {
                    variant,
                    value: node.into_value(),
                })
            }
            other => Err(Error::type_mismatch(
                "text or single-node object",
                other.type_name(),
            )),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(items: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: items.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(Deserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: <Document as IntoIterator>::IntoIter,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(doc: Document) -> Self {
        MapDeserializer {
            iter: doc.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(node) => {
                let key = node.key().to_string();
                self.value = Some(node.into_value());
                seed.deserialize(Deserializer::new(Value::Text(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(Deserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Deserializer::new(Value::Text(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Err(Error::type_mismatch("text", self.value.type_name()))
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::List(items) => visitor.visit_seq(SeqDeserializer::new(items)),
            other => Err(Error::type_mismatch("list", other.type_name())),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(doc) => visitor.visit_map(MapDeserializer::new(doc)),
            other => Err(Error::type_mismatch("object", other.type_name())),
        }
    }
}
