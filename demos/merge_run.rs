//! Merge Run Demo
//!
//! Simulates one rendered document per data record and merges a
//! contiguous run of them into a single delivery document.
//!
//! Usage:
//!   cargo run --example merge_run

use anyhow::Result;
use composer::{Merge, Merged, RenderStack};

/// Minimal stand-in for a rendered document: a list of page labels.
#[derive(Debug, Clone)]
struct Rendered(Vec<String>);

impl Merge for Rendered {
    fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }
}

fn main() -> Result<()> {
    // One rendered document per record, in render order.
    let stack: RenderStack<Rendered> = (1..=5)
        .map(|record| Rendered(vec![format!("record-{record}/page-1")]))
        .collect();

    println!("Rendered {} documents", stack.len());
    println!("Third document: {:?}", stack.get(2));

    match stack.merge_range(1..4) {
        Merged::Document(doc) => println!("Merged records 2-4: {:?}", doc.0),
        Merged::Empty => println!("Nothing to merge"),
    }

    match stack.into_merged() {
        Merged::Document(doc) => println!("Full delivery document: {} pages", doc.0.len()),
        Merged::Empty => println!("No documents rendered"),
    }

    Ok(())
}
