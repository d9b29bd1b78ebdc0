//! Command-line front end for pdfamark.
//!
//! ```text
//! pdfamark generate pdfa_def.ps [--icc sRGB]
//! pdfamark check output.pdf [--json]
//! ```

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use pdfamark::{file_claims_pdfa, generate_pdfa_ps, PdfaClaim, PdfmarkConfig, Result};
use std::path::{Path, PathBuf};
use std::process;

/// Exit status of `check` when the document does not claim PDF/A.
const EXIT_NOT_PDFA: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = build_cli().get_matches();

    let outcome = match matches.subcommand() {
        Some(("generate", sub)) => run_generate(sub).map(|()| 0),
        Some(("check", sub)) => run_check(sub),
        _ => {
            // subcommand_required makes this unreachable in practice
            let _ = build_cli().print_help();
            Ok(1)
        }
    };

    match outcome {
        Ok(code) => process::exit(code),
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new("pdfamark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ghostscript pdfmark generation and PDF/A claim checking")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Write the pdfmark prologue Ghostscript needs for PDF/A output")
                .arg(
                    Arg::new("target")
                        .value_name("TARGET")
                        .help("Path of the pdfmark file to write")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("icc")
                        .long("icc")
                        .value_name("ID")
                        .help("ICC profile identifier of the output intent")
                        .default_value("sRGB"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report the PDF/A conformance a PDF claims in its XMP metadata")
                .arg(
                    Arg::new("pdf")
                        .value_name("PDF")
                        .help("PDF file to inspect")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the claim as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn run_generate(matches: &ArgMatches) -> Result<()> {
    // required(true) and default_value guarantee both
    let target = matches.get_one::<PathBuf>("target").expect("TARGET is required");
    let config = PdfmarkConfig {
        icc: matches.get_one::<String>("icc").expect("--icc has a default").clone(),
        ..Default::default()
    };

    generate_pdfa_ps(target, &config)?;
    log::info!("wrote {}", target.display());
    Ok(())
}

fn run_check(matches: &ArgMatches) -> Result<i32> {
    let pdf = matches.get_one::<PathBuf>("pdf").expect("PDF is required");

    let claim = file_claims_pdfa(pdf)?;
    if matches.get_flag("json") {
        println!("{}", claim.to_json()?);
    } else {
        println!("{}", status_line(pdf, &claim));
    }

    Ok(if claim.pass { 0 } else { EXIT_NOT_PDFA })
}

/// One human-readable line per checked file.
fn status_line(pdf: &Path, claim: &PdfaClaim) -> String {
    let mark = if claim.pass { "✅" } else { "⚠️ " };
    let mut line = format!("{mark} {}: {} (output: {}", pdf.display(), claim.conformance, claim.output);
    if let Some(level) = claim.level {
        line.push_str(&format!(", gs -dPDFA={}", level.part()));
    }
    line.push(')');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfamark::classify_status;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn check_requires_a_pdf() {
        assert!(build_cli().try_get_matches_from(["pdfamark", "check"]).is_err());
        assert!(build_cli().try_get_matches_from(["pdfamark", "generate"]).is_err());
    }

    #[test]
    fn passing_claim_names_the_ghostscript_part() {
        let line = status_line(Path::new("out.pdf"), &classify_status("3B"));
        assert_eq!(line, "✅ out.pdf: PDF/A-3B (output: pdfa, gs -dPDFA=3)");
    }

    #[test]
    fn failing_claim_has_no_part() {
        let line = status_line(Path::new("in.pdf"), &classify_status(""));
        assert_eq!(line, "⚠️  in.pdf: No PDF/A metadata in XMP (output: pdf)");
    }
}
