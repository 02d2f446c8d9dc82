//! Form Fill Demo
//!
//! Loads a scanned field stream and a form-data file, fills the
//! elements, validates them, and prints the populated set.
//!
//! Usage:
//!   cargo run --example fill_form -- <fields.json> <data.json>
//!
//! `fields.json` is a JSON array of `{ "name": ..., "type": ... }`
//! descriptors; `data.json` is an object keyed by field name.

use anyhow::{bail, Context, Result};
use form_core::{apply_form_data, parse_field_stream};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <fields.json> <data.json>", args[0]);
        std::process::exit(1);
    }

    let fields_json = std::fs::read_to_string(&args[1])
        .with_context(|| format!("failed to read {}", args[1]))?;
    let data_json = std::fs::read_to_string(&args[2])
        .with_context(|| format!("failed to read {}", args[2]))?;

    let mut elements = parse_field_stream(&fields_json)?;
    println!("Scanned {} fields", elements.len());

    let data: serde_json::Value =
        serde_json::from_str(&data_json).context("form data is not valid JSON")?;
    apply_form_data(&mut elements, &data)?;

    for element in &elements {
        if let Err(e) = element.validate() {
            bail!("validation failed: {e}");
        }
    }

    println!("{}", serde_json::to_string_pretty(&elements)?);
    Ok(())
}
