use serde_msf::{msf, parse, serialize, Document, Value};

#[test]
fn test_msf_macro_booleans() {
    assert_eq!(msf!(true), Value::Boolean(true));
    assert_eq!(msf!(false), Value::Boolean(false));
}

#[test]
fn test_msf_macro_integers() {
    assert_eq!(msf!(42), Value::Integer(42));
    assert_eq!(msf!(-123), Value::Integer(-123));
    assert_eq!(msf!(i64::MAX), Value::Integer(i64::MAX));
}

#[test]
fn test_msf_macro_text() {
    assert_eq!(msf!("hello world"), Value::Text("hello world".to_string()));
    assert_eq!(msf!(""), Value::Text(String::new()));

    let owned = String::from("owned");
    assert_eq!(msf!(owned), Value::from("owned"));
}

#[test]
fn test_msf_macro_lists() {
    assert_eq!(msf!([]), Value::List(vec![]));

    assert_eq!(
        msf!([1, "hello", true, []]),
        Value::List(vec![
            Value::Integer(1),
            Value::Text("hello".to_string()),
            Value::Boolean(true),
            Value::List(vec![]),
        ])
    );
}

#[test]
fn test_msf_macro_nested_documents() {
    let value = msf!({
        "server": {
            "name": "srv",
            "ports": [80, 443]
        },
        "replicas": [{ "id": 1 }, { "id": 2 }]
    });

    let doc = value.as_object().unwrap();
    let server = doc.get::<&Document>("server").unwrap();
    assert_eq!(server.get::<&str>("name").unwrap(), "srv");
    assert_eq!(server.get::<&[Value]>("ports").unwrap().len(), 2);

    let replicas = doc.get::<&[Value]>("replicas").unwrap();
    assert_eq!(replicas[1].as_object().unwrap().get::<i64>("id").unwrap(), 2);
}

#[test]
fn test_msf_macro_matches_parsed_text() {
    let text = "{ name = \"srv\"; port = 8080; tags = [\"a\", \"b\"]; tls = { on = false; }; }";
    let built = msf!({
        "name": "srv",
        "port": 8080,
        "tags": ["a", "b"],
        "tls": { "on": false }
    });

    assert_eq!(built, Value::Object(parse(text).unwrap()));
    if let Value::Object(doc) = built {
        assert_eq!(
            serialize(&doc),
            "{\nname = \"srv\";\nport = 8080;\ntags = [\"a\", \"b\"];\ntls = {\non = false;\n};\n}"
        );
    }
}

#[test]
fn test_msf_macro_repeated_key_overwrites() {
    let value = msf!({ "a": 1, "b": 2, "a": 3 });
    assert_eq!(value.to_string(), "{\na = 3;\nb = 2;\n}");
}

#[test]
fn test_msf_macro_expressions() {
    let port: u16 = 8080;
    let hosts = vec!["a", "b"];
    let value = msf!({ "port": port, "hosts": hosts });
    assert_eq!(value.to_string(), "{\nport = 8080;\nhosts = [\"a\", \"b\"];\n}");
}
