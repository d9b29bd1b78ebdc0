//! Write a pdfmark prologue and print the Ghostscript command that uses it.
//!
//! Usage:
//!   cargo run --example generate_pdfmark -- pdfa_def.ps
//!   cargo run --example generate_pdfmark -- pdfa_def.ps input.pdf output.pdf

use pdfamark::{generate_pdfa_ps, srgb_icc_profile, PdfmarkConfig};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdfmark.ps> [input.pdf output.pdf]", args[0]);
        process::exit(1);
    }

    let target = &args[1];
    if let Err(e) = generate_pdfa_ps(target, &PdfmarkConfig::default()) {
        eprintln!("Cannot write pdfmark: {e}");
        process::exit(1);
    }

    println!("📄 Wrote {target}");
    println!("🎨 ICC profile: {}", srgb_icc_profile().display());

    let input = args.get(2).map(String::as_str).unwrap_or("input.pdf");
    let output = args.get(3).map(String::as_str).unwrap_or("output.pdf");
    println!();
    println!("Convert with:");
    println!(
        "    gs -dPDFA=2 -dBATCH -dNOPAUSE -dPDFACompatibilityPolicy=1 \\\n       \
         -sColorConversionStrategy=RGB -sDEVICE=pdfwrite \\\n       \
         -sOutputFile={output} {target} {input}"
    );
}
