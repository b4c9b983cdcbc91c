//! Generate CATALOG.md from the built-in standard sections.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-catalog [output path]
//! ```
//!
//! Writes `CATALOG.md` in the current directory unless a path is given.

use std::fs;
use std::path::PathBuf;

use section_core::catalog::{catalog, generate_catalog_markdown};

fn main() {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("CATALOG.md"));

    println!("Generating {}...", output_path.display());

    let markdown = generate_catalog_markdown(catalog());

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!(
                "Wrote {} sections ({} bytes) to {}",
                catalog().len(),
                markdown.len(),
                output_path.display()
            );
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
