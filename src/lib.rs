//! # serde_msf
//!
//! A parser, canonical serializer and Serde data format for MSF, a small
//! brace-delimited text format for hierarchical configuration data.
//!
//! ## What is MSF?
//!
//! An MSF document is a brace-delimited block of `key = value;` assignments.
//! Values are integers, double-quoted text, booleans, bracketed lists and
//! nested documents:
//!
//! ```text
//! {
//! name = "server one";
//! port = 8080;
//! tls = false;
//! hosts = ["a.example", "b.example"];
//! limits = {
//! max_conn = 512;
//! };
//! }
//! ```
//!
//! See the [`grammar`] module for the full description of the format.
//!
//! ## Key Features
//!
//! - **Ordered**: documents keep their keys in insertion order, so output is
//!   deterministic
//! - **Canonical Output**: [`serialize`] always produces the same text for the
//!   same [`Document`], and that text parses back to an equal document
//! - **Typed Access**: [`Document::get`] checks the stored variant and never
//!   converts between integers, text and booleans
//! - **Serde Compatible**: works with `#[derive(Serialize, Deserialize)]`
//!   through the dynamic [`Value`] model
//! - **Positioned Errors**: syntax errors carry the offending token with its
//!   line, column and index
//!
//! ## Quick Start
//!
//! ### Working with Documents
//!
//! ```rust
//! use serde_msf::{parse, serialize, Document};
//!
//! let doc = parse("{ name = \"srv\"; port = 8080; limits = { max_conn = 512; }; }").unwrap();
//!
//! assert_eq!(doc.get::<&str>("name").unwrap(), "srv");
//! assert_eq!(doc.get::<i64>("port").unwrap(), 8080);
//! let limits = doc.get::<&Document>("limits").unwrap();
//! assert_eq!(limits.get::<i64>("max_conn").unwrap(), 512);
//!
//! assert_eq!(
//!     serialize(&doc),
//!     "{\nname = \"srv\";\nport = 8080;\nlimits = {\nmax_conn = 512;\n};\n}"
//! );
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_msf::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     name: String,
//!     port: u16,
//!     hosts: Vec<String>,
//! }
//!
//! let server = Server {
//!     name: "srv".to_string(),
//!     port: 8080,
//!     hosts: vec!["a".to_string(), "b".to_string()],
//! };
//!
//! let text = to_string(&server).unwrap();
//! assert_eq!(text, "{\nname = \"srv\";\nport = 8080;\nhosts = [\"a\", \"b\"];\n}");
//!
//! let back: Server = from_str(&text).unwrap();
//! assert_eq!(server, back);
//! ```
//!
//! ### Dynamic Values with msf! Macro
//!
//! ```rust
//! use serde_msf::{msf, Value};
//!
//! let data = msf!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! if let Value::Object(doc) = data {
//!     assert_eq!(doc.get::<&str>("name").unwrap(), "Alice");
//! }
//! ```
//!
//! ## Limitations
//!
//! - Numbers are 64-bit signed integers; there are no floats
//! - Text has no escape sequences, so it cannot contain `"`
//! - There is no null; optional struct fields must be skipped when `None`
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: parse
//! failures at `debug`, token counts at `trace`. No logger is installed.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parsing, typed access and canonical output
//! - **`dynamic_values.rs`** - building and walking documents at runtime
//! - **`custom_options.rs`** - indentation and strict duplicate handling
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod document;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod options;
pub mod parser;
pub mod ser;
pub mod token;
pub mod value;

pub use de::Deserializer;
pub use document::{is_valid_key, Document, Node};
pub use error::{Error, Result};
pub use options::{DuplicateKeys, MsfOptions};
pub use parser::Parser;
pub use ser::{Serializer, ValueSerializer};
pub use value::{FromValue, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parses MSF text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use serde_msf::parse;
///
/// let doc = parse("{ a = 1; a = 2; }").unwrap();
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.get::<i64>("a").unwrap(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] or [`Error::UnexpectedEof`] when the text does
/// not match the grammar. The error names the offending token and its
/// position.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Document> {
    parse_with_options(text, &MsfOptions::default())
}

/// Parses MSF text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_msf::{parse_with_options, DuplicateKeys, Error, MsfOptions};
///
/// let options = MsfOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
/// let err = parse_with_options("{ a = 1; a = 2; }", &options).unwrap_err();
/// assert!(matches!(err, Error::DuplicateKey { .. }));
/// ```
///
/// # Errors
///
/// Returns a syntax error for malformed text and, with
/// [`DuplicateKeys::Reject`], [`Error::DuplicateKey`] for a repeated key.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: &MsfOptions) -> Result<Document> {
    Parser::new(text, options).parse()
}

/// Serializes a [`Document`] to canonical MSF text.
///
/// # Examples
///
/// ```rust
/// use serde_msf::{serialize, Document};
///
/// let mut doc = Document::new();
/// doc.set("a", 1).unwrap();
/// doc.set("b", vec![true, false]).unwrap();
/// assert_eq!(serialize(&doc), "{\na = 1;\nb = [true, false];\n}");
/// ```
#[must_use]
pub fn serialize(doc: &Document) -> String {
    serialize_with_options(doc, &MsfOptions::default())
}

/// Serializes a [`Document`] with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_msf::{parse, serialize_with_options, MsfOptions};
///
/// let doc = parse("{ a = 1; }").unwrap();
/// assert_eq!(serialize_with_options(&doc, &MsfOptions::pretty()), "{\n  a = 1;\n}");
/// ```
#[must_use]
pub fn serialize_with_options(doc: &Document, options: &MsfOptions) -> String {
    ser::document_to_string(doc, options)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_msf::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for floats, `None`, unit and integers
/// outside the `i64` range, and [`Error::InvalidKey`] for map keys that are
/// not valid MSF keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_msf::{from_value, Value};
///
/// let value = Value::List(vec![Value::from(1), Value::from(2)]);
/// let numbers: Vec<u8> = from_value(value).unwrap();
/// assert_eq!(numbers, vec![1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(Deserializer::new(value))
}

/// Serialize any `T: Serialize` to canonical MSF text.
///
/// `T` must serialize to a document: a struct, a map or a non-unit enum
/// variant.
///
/// # Examples
///
/// ```rust
/// use serde_msf::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: -2 }).unwrap(), "{\nx = 1;\ny = -2;\n}");
/// assert!(to_string(&vec![1, 2]).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in MSF or is not a
/// document at the top level.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &MsfOptions::default())
}

/// Serialize any `T: Serialize` to MSF text with custom options.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &MsfOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        Value::Object(doc) => Ok(serialize_with_options(&doc, options)),
        _ => Err(Error::unsupported_type("top-level value must be a document")),
    }
}

/// Deserialize an instance of type `T` from MSF text.
///
/// # Examples
///
/// ```rust
/// use serde_msf::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{ x = 1; y = 2; }").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a syntax error for malformed text, or a deserialization error if
/// the document does not match `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(text, &MsfOptions::default())
}

/// Deserialize an instance of type `T` from MSF text with custom options.
///
/// # Errors
///
/// Same as [`from_str`], plus [`Error::DuplicateKey`] in strict mode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(text: &str, options: &MsfOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let doc = parse_with_options(text, options)?;
    from_value(Value::Object(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        nickname: Option<String>,
    }

    fn alice() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
            nickname: None,
        }
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = alice();
        let text = to_string(&user).unwrap();
        assert_eq!(
            text,
            "{\nid = 123;\nname = \"Alice\";\nactive = true;\ntags = [\"admin\", \"user\"];\n}"
        );
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_optional_field_present() {
        let mut user = alice();
        user.nickname = Some("al".to_string());
        let user_back: User = from_str(&to_string(&user).unwrap()).unwrap();
        assert_eq!(user_back.nickname.as_deref(), Some("al"));
    }

    #[test]
    fn test_pretty_printing() {
        let user = alice();
        let text = to_string_with_options(&user, &MsfOptions::pretty()).unwrap();
        assert!(text.contains("\n  id = 123;\n"));
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();

        match value {
            Value::Object(doc) => {
                assert_eq!(doc.value("x"), Some(&Value::Integer(1)));
                assert_eq!(doc.value("y"), Some(&Value::Integer(2)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_top_level_must_be_document() {
        assert!(matches!(to_string(&42), Err(Error::UnsupportedType(_))));
        assert!(matches!(to_string(&vec![1, 2]), Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_parse_serialize_round_trip() {
        let text = "{\na = 1;\nb = \"two\";\nc = [true, {\nd = -4;\n}];\n}";
        let doc = parse(text).unwrap();
        assert_eq!(serialize(&doc), text);
        assert_eq!(text.parse::<Document>().unwrap(), doc);
    }

    #[test]
    fn test_from_str_syntax_error() {
        let err = from_str::<Point>("{ x = 1 }").unwrap_err();
        assert!(err.is_syntax());
    }
}
