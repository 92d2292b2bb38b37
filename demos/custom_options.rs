//! Customizing MSF output and parsing with MsfOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_msf::{
    from_str_with_options, parse, parse_with_options, to_string, to_string_with_options,
    DuplicateKeys, MsfOptions,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    listen: Listen,
}

#[derive(Debug, Serialize, Deserialize)]
struct Listen {
    host: String,
    ports: Vec<u16>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        listen: Listen {
            host: "0.0.0.0".to_string(),
            ports: vec![80, 443],
        },
    };

    // Canonical form
    println!("Canonical:");
    println!("{}\n", to_string(&config)?);

    // Two spaces per level
    println!("Pretty:");
    println!("{}\n", to_string_with_options(&config, &MsfOptions::pretty())?);

    // Four spaces per level
    println!("Indent 4:");
    let wide = MsfOptions::new().with_indent(4);
    println!("{}\n", to_string_with_options(&config, &wide)?);

    // Duplicate keys: last write wins by default, strict mode rejects them
    let text = "{ name = \"a\"; version = \"1\"; debug = false; name = \"b\"; listen = { host = \"h\"; ports = []; }; }";
    let lenient = parse(text)?;
    println!("Lenient: name = {}", lenient.get::<&str>("name")?);

    let strict = MsfOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
    if let Err(err) = parse_with_options(text, &strict) {
        println!("Strict: {}", err);
    }
    if let Err(err) = from_str_with_options::<Config>(text, &strict) {
        println!("Strict (serde): {}", err);
    }

    Ok(())
}
