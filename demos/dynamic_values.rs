//! Building and walking MSF documents at runtime.
//!
//! Run with: cargo run --example dynamic_values

use serde_msf::{msf, parse, Document, Value};
use std::error::Error;

fn describe(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Object(doc) => {
            for node in doc.nodes() {
                println!("{}{} ({})", pad, node.key(), node.value().type_name());
                describe(node.value(), depth + 1);
            }
        }
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                println!("{}[{}] {}", pad, i, item);
                if item.is_object() {
                    describe(item, depth + 1);
                }
            }
        }
        _ => println!("{}= {}", pad, value),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build with the API
    let mut db = Document::new();
    db.set("host", "localhost")?;
    db.set("port", 5432)?;

    let mut config = Document::new();
    config.set("name", "inventory")?;
    config.set("replicas", vec![1, 2, 3])?;
    config.set("db", db)?;

    // Replacing a value keeps the key in place
    let previous = config.set("name", "inventory-v2")?;
    println!("replaced {:?}\n", previous);

    // Invalid keys are rejected up front
    if let Err(err) = config.set("not a key", true) {
        println!("rejected: {}\n", err);
    }

    println!("{}\n", config);

    // Build the same shape with the macro
    let built = msf!({
        "name": "inventory-v2",
        "replicas": [1, 2, 3],
        "db": { "host": "localhost", "port": 5432 }
    });
    assert_eq!(built, Value::Object(config.clone()));

    // Walk a parsed document
    let parsed = parse("{ jobs = [{ id = 1; tags = [\"nightly\"]; }, { id = 2; tags = []; }]; }")?;
    describe(&Value::Object(parsed), 0);

    // Typed access never converts between variants
    match config.get::<i64>("name") {
        Ok(_) => unreachable!(),
        Err(err) => println!("\n{}", err),
    }

    Ok(())
}
