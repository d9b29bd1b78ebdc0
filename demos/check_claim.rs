//! Print the PDF/A claim of every PDF given on the command line.
//!
//! Usage:
//!   cargo run --example check_claim -- a.pdf b.pdf c.pdf

use pdfamark::PdfaInspector;
use std::{env, process};

fn main() {
    let paths: Vec<String> = env::args().skip(1).collect();

    if paths.is_empty() {
        eprintln!("Usage: check_claim <pdf>...");
        process::exit(1);
    }

    let mut failures = 0;
    for path in &paths {
        let claim = PdfaInspector::from_path(path).and_then(|inspector| inspector.claim());
        match claim {
            Ok(claim) if claim.pass => println!("✅ {path}: {}", claim.conformance),
            Ok(claim) => println!("➖ {path}: {}", claim.conformance),
            Err(e) => {
                println!("❌ {path}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
