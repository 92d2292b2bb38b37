//! Property-based tests for the core round-trip guarantees
//!
//! Documents are generated from the value model with valid keys and text that
//! contains no double quote, which is every document the grammar can express.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_msf::{
    from_str, parse, serialize, serialize_with_options, to_string, Document, MsfOptions, Value,
};

fn key() -> impl Strategy<Value = String> {
    "[_a-zA-Z][._a-zA-Z0-9]{0,8}"
}

fn text() -> impl Strategy<Value = String> {
    "[^\"]{0,16}"
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        text().prop_map(Value::Text),
        any::<bool>().prop_map(Value::Boolean),
    ]
}

fn document_of(value: impl Strategy<Value = Value>) -> impl Strategy<Value = Document> {
    prop::collection::vec((key(), value), 0..6).prop_map(|pairs| {
        let mut doc = Document::new();
        for (key, value) in pairs {
            doc.set(key, value).unwrap();
        }
        doc
    })
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            document_of(inner).prop_map(Value::Object),
        ]
    })
}

fn document() -> impl Strategy<Value = Document> {
    document_of(value())
}

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Wrapper<T> {
    inner: T,
}

proptest! {
    #[test]
    fn prop_document_round_trip(doc in document()) {
        let text = serialize(&doc);
        prop_assert_eq!(parse(&text).unwrap(), doc);
    }

    #[test]
    fn prop_canonical_form_is_idempotent(doc in document()) {
        let once = serialize(&doc);
        let twice = serialize(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_indented_output_parses_back(doc in document(), indent in 1usize..5) {
        let text = serialize_with_options(&doc, &MsfOptions::new().with_indent(indent));
        prop_assert_eq!(parse(&text).unwrap(), doc);
    }

    #[test]
    fn prop_parse_never_panics(input in "[{}\\[\\];=,\" a-z0-9-]{0,40}") {
        let _ = parse(&input);
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        let wrapped = Wrapper { inner: n };
        prop_assert!(roundtrip(&wrapped));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        let wrapped = Wrapper { inner: n };
        prop_assert!(roundtrip(&wrapped));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        let wrapped = Wrapper { inner: b };
        prop_assert!(roundtrip(&wrapped));
    }

    #[test]
    fn prop_string(s in text()) {
        let wrapped = Wrapper { inner: s };
        prop_assert!(roundtrip(&wrapped));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let wrapped = Wrapper { inner: v };
        prop_assert!(roundtrip(&wrapped));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        let wrapped = Wrapper { inner: t };
        prop_assert!(roundtrip(&wrapped));
    }
}
