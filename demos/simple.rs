//! Basic MSF parsing, typed access and serde round trips.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_msf::{from_str, parse, serialize, to_string, Document};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Team {
    name: String,
    members: Vec<User>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Parse text into a document and read typed values
    let doc = parse("{ title = \"ops\"; size = 2; limits = { cpu = 4; }; }")?;
    let limits = doc.get::<&Document>("limits")?;
    println!(
        "title={} size={} cpu={}",
        doc.get::<&str>("title")?,
        doc.get::<i64>("size")?,
        limits.get::<i64>("cpu")?
    );
    println!("Canonical form:\n{}\n", serialize(&doc));

    let team = Team {
        name: "core".to_string(),
        members: vec![
            User {
                id: 42,
                name: "Alice Johnson".to_string(),
                email: "alice@example.com".to_string(),
            },
            User {
                id: 43,
                name: "Bob Smith".to_string(),
                email: "bob@example.com".to_string(),
            },
        ],
    };

    // Serialize to MSF
    let text = to_string(&team)?;
    println!("MSF output:\n{}\n", text);

    // Deserialize back to struct
    let team_back: Team = from_str(&text)?;
    assert_eq!(team, team_back);
    println!("✓ Round-trip successful");

    Ok(())
}
