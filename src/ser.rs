//! MSF serialization.
//!
//! This module holds the two halves of the write path:
//!
//! - [`Serializer`] writes a [`Document`] as text. With default options the
//!   output is the canonical form: `{`, a newline, one `key = value;` line
//!   per node in insertion order, then `}`.
//! - [`ValueSerializer`] is a `serde::Serializer` that turns any
//!   `T: Serialize` into a [`Value`].
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_msf::{parse, serialize};
//!
//! let doc = parse("{ tags = [\"a\",\"b\"]; size = { w = 3; h = 4; }; }").unwrap();
//! assert_eq!(
//!     serialize(&doc),
//!     "{\ntags = [\"a\", \"b\"];\nsize = {\nw = 3;\nh = 4;\n};\n}"
//! );
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_msf::{Document, MsfOptions, Serializer};
//!
//! let mut doc = Document::new();
//! doc.set("x", 1).unwrap();
//!
//! let mut serializer = Serializer::new(MsfOptions::pretty());
//! serializer.write_document(&doc);
//! assert_eq!(serializer.into_inner(), "{\n  x = 1;\n}");
//! ```

use crate::{Document, Error, MsfOptions, Node, Result, Value};
use serde::{ser, Serialize};

/// Writes documents, nodes and values as MSF text.
pub struct Serializer {
    output: String,
    options: MsfOptions,
    depth: usize,
}

impl Serializer {
    pub fn new(options: MsfOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        let width = self.depth * self.options.indent;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    /// `{`, newline, every node, `}`. Nothing follows the closing brace.
    pub fn write_document(&mut self, doc: &Document) {
        self.output.push('{');
        self.output.push('\n');

        self.depth += 1;
        for node in doc.nodes() {
            self.write_indent();
            self.write_node(node);
        }
        self.depth -= 1;

        self.write_indent();
        self.output.push('}');
    }

    /// `key = value;` and a newline.
    pub fn write_node(&mut self, node: &Node) {
        self.output.push_str(node.key());
        self.output.push_str(" = ");
        self.write_value(node.value());
        self.output.push(';');
        self.output.push('\n');
    }

    pub fn write_value(&mut self, value: &Value) {
        match value {
            Value::Integer(i) => self.output.push_str(&i.to_string()),
            // Text is written verbatim; an embedded `"` is not escaped.
            Value::Text(s) => {
                self.output.push('"');
                self.output.push_str(s);
                self.output.push('"');
            }
            Value::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::List(items) => {
                self.output.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.write_value(item);
                }
                self.output.push(']');
            }
            Value::Object(doc) => self.write_document(doc),
        }
    }
}

pub(crate) fn document_to_string(doc: &Document, options: &MsfOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_document(doc);
    serializer.into_inner()
}

pub(crate) fn node_to_string(node: &Node) -> String {
    let mut serializer = Serializer::new(MsfOptions::default());
    serializer.write_node(node);
    serializer.into_inner()
}

pub(crate) fn value_to_string(value: &Value) -> String {
    let mut serializer = Serializer::new(MsfOptions::default());
    serializer.write_value(value);
    serializer.into_inner()
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// Structs and maps become [`Value::Object`], sequences and tuples
/// [`Value::List`]. A unit variant becomes its name as text; other enum
/// variants become a one-node object keyed by the variant name. Floats,
/// `None` and `()` have no MSF representation and fail with
/// [`Error::UnsupportedType`].
pub struct ValueSerializer;

fn integer<T>(v: T) -> Result<Value>
where
    T: TryInto<i64> + std::fmt::Display + Copy,
{
    v.try_into()
        .map(Value::Integer)
        .map_err(|_| Error::unsupported_type(&format!("integer {} does not fit in i64", v)))
}

fn variant_object(variant: &'static str, value: Value) -> Result<Value> {
    let mut doc = Document::new();
    doc.set(variant, value)?;
    Ok(Value::Object(doc))
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;
    type SerializeTupleVariant = SerializeListVariant;
    type SerializeMap = SerializeDocument;
    type SerializeStruct = SerializeDocument;
    type SerializeStructVariant = SerializeDocumentVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        integer(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        integer(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        integer(v)
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Err(Error::unsupported_type(&format!(
            "floating-point number {} (MSF numbers are integers)",
            v
        )))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Text(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(Error::unsupported_type(
            "None (skip the field with #[serde(skip_serializing_if = \"Option::is_none\")])",
        ))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(Error::unsupported_type("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Err(Error::unsupported_type(&format!("unit struct {}", name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Text(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        variant_object(variant, to_value(value)?)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeList> {
        Ok(SerializeList::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeList> {
        Ok(SerializeList::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeList> {
        Ok(SerializeList::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeListVariant> {
        Ok(SerializeListVariant {
            variant,
            list: SerializeList::new(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeDocument> {
        Ok(SerializeDocument::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeDocument> {
        Ok(SerializeDocument::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeDocumentVariant> {
        Ok(SerializeDocumentVariant {
            variant,
            doc: SerializeDocument::new(len),
        })
    }
}

pub(crate) fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

pub struct SerializeList {
    items: Vec<Value>,
}

impl SerializeList {
    fn new(capacity: usize) -> Self {
        SerializeList {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl ser::SerializeSeq for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.items))
    }
}

impl ser::SerializeTuple for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

pub struct SerializeListVariant {
    variant: &'static str,
    list: SerializeList,
}

impl ser::SerializeTupleVariant for SerializeListVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(&mut self.list, value)
    }

    fn end(self) -> Result<Value> {
        variant_object(self.variant, ser::SerializeSeq::end(self.list)?)
    }
}

pub struct SerializeDocument {
    doc: Document,
    current_key: Option<String>,
}

impl SerializeDocument {
    fn new(capacity: usize) -> Self {
        SerializeDocument {
            doc: Document::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeMap for SerializeDocument {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::Text(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::unsupported_type(&format!(
                "{} map key (keys must be text)",
                other.type_name()
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.doc.set(key, to_value(value)?)?;
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.doc))
    }
}

impl ser::SerializeStruct for SerializeDocument {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.doc.set(key, to_value(value)?)?;
        Ok(())
    }

    fn end(self) -> Result<Value> {
        ser::SerializeMap::end(self)
    }
}

pub struct SerializeDocumentVariant {
    variant: &'static str,
    doc: SerializeDocument,
}

impl ser::SerializeStructVariant for SerializeDocumentVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.doc, key, value)
    }

    fn end(self) -> Result<Value> {
        variant_object(self.variant, ser::SerializeMap::end(self.doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(pairs: Vec<(&str, Value)>) -> Document {
        let mut doc = Document::new();
        for (key, value) in pairs {
            doc.set(key, value).unwrap();
        }
        doc
    }

    #[test]
    fn test_canonical_document() {
        let d = doc(vec![
            ("a", Value::from(1)),
            ("b", Value::from("x y")),
            ("c", Value::List(vec![Value::from(true), Value::from(false)])),
        ]);
        assert_eq!(
            document_to_string(&d, &MsfOptions::default()),
            "{\na = 1;\nb = \"x y\";\nc = [true, false];\n}"
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(document_to_string(&Document::new(), &MsfOptions::default()), "{\n}");
        let d = doc(vec![("a", Value::List(vec![]))]);
        assert_eq!(document_to_string(&d, &MsfOptions::default()), "{\na = [];\n}");
    }

    #[test]
    fn test_list_of_documents() {
        let d = doc(vec![(
            "a",
            Value::List(vec![
                Value::Object(doc(vec![("x", Value::from(1))])),
                Value::Object(doc(vec![("x", Value::from(2))])),
            ]),
        )]);
        assert_eq!(
            document_to_string(&d, &MsfOptions::default()),
            "{\na = [{\nx = 1;\n}, {\nx = 2;\n}];\n}"
        );
    }

    #[test]
    fn test_pretty_indents_nested_documents() {
        let inner = doc(vec![("b", Value::from(1))]);
        let d = doc(vec![("a", Value::Object(inner)), ("c", Value::from(2))]);
        assert_eq!(
            document_to_string(&d, &MsfOptions::pretty()),
            "{\n  a = {\n    b = 1;\n  };\n  c = 2;\n}"
        );
    }

    #[test]
    fn test_node_display() {
        let d = doc(vec![("key", Value::from(0))]);
        let node = d.node("key").unwrap();
        assert_eq!(node.to_string(), "key = 0;\n");
    }

    #[test]
    fn test_value_serializer_rejects_floats_and_none() {
        assert!(matches!(to_value(&1.5f64), Err(Error::UnsupportedType(_))));
        assert!(matches!(to_value(&None::<i32>), Err(Error::UnsupportedType(_))));
        assert!(matches!(to_value(&u64::MAX), Err(Error::UnsupportedType(_))));
        assert_eq!(to_value(&Some(3u64)).unwrap(), Value::Integer(3));
    }

    #[test]
    fn test_value_serializer_map_keys() {
        let mut map = std::collections::BTreeMap::new();
        map.insert("bad key", 1);
        assert!(matches!(to_value(&map), Err(Error::InvalidKey(_))));

        let mut map = std::collections::BTreeMap::new();
        map.insert(1, 1);
        assert!(matches!(to_value(&map), Err(Error::UnsupportedType(_))));
    }
}
