//! Generate the JSON Schema for the long-lines configuration
//!
//! Usage:
//!   cargo run --features dev-bins --bin generate_schema > long_lines.schema.json
//!   cargo run --features dev-bins --bin generate_schema partial

use long_lines::config::LongLinesConfig;
use long_lines::partial_config::PartialLongLinesConfig;
use schemars::schema_for;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let schema_type = args.get(1).map(|s| s.as_str()).unwrap_or("config");

    let schema = match schema_type {
        "config" => schema_for!(LongLinesConfig),
        "partial" => schema_for!(PartialLongLinesConfig),
        other => {
            eprintln!("Unknown schema type: {}. Use 'config' or 'partial'.", other);
            std::process::exit(1);
        }
    };

    let output = serde_json::to_string_pretty(&schema).expect("Failed to serialize schema");
    println!("{}", output);
}
