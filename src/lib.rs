//! # pdfamark
//!
//! A Rust library for preparing PDF/A conversions with Ghostscript and for
//! checking whether a PDF already claims PDF/A conformance.
//!
//! ## What this crate does
//!
//! 1. **Generate a pdfmark file**: writes the PostScript prologue Ghostscript
//!    needs to attach an sRGB OutputIntent while converting a PDF to PDF/A.
//! 2. **Check a PDF/A claim**: reads the XMP metadata stream and reports the
//!    `pdfaid` part and conformance level the document declares.
//!
//! Checking a claim is not validation. A document may declare PDF/A-2B in its
//! XMP and still violate the standard.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfamark::{file_claims_pdfa, generate_pdfa_ps, PdfmarkConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! generate_pdfa_ps("pdfa_def.ps", &PdfmarkConfig::default())?;
//!
//! let claim = file_claims_pdfa("output.pdf")?;
//! println!("{} ({})", claim.conformance, claim.output);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use thiserror::Error;

mod claim;
mod date;
mod encoding;
mod icc;
mod inspector;
mod metadata;
mod pdfmark;
mod xmp;

pub use claim::{classify_status, OutputKind, PdfaClaim, PdfaLevel, NO_PDFA_METADATA};
#[allow(deprecated)]
pub use date::{decode_pdf_date, encode_pdf_date};
#[allow(deprecated)]
pub use encoding::encode_text_string;
pub use encoding::{encode_ascii, hex_string_literal, path_bytes};
pub use icc::{srgb_icc_profile, IccProfile, DATA_DIR_ENV, ICC_PROFILE_RELPATH};
pub use inspector::{file_claims_pdfa, PdfaInspector};
pub use pdfmark::{generate_pdfa_ps, pdfa_def};

// ── Configuration ────────────────────────────────────────────────────────────

/// Options for [`generate_pdfa_ps`].
#[derive(Debug, Clone)]
pub struct PdfmarkConfig {
    /// ICC identifier of the output intent. Only `"sRGB"` is implemented.
    pub icc: String,

    /// Legacy docinfo entries. Accepted for compatibility and ignored: docinfo
    /// is carried by the PDF itself, not by the pdfmark.
    pub pdfmark: Option<BTreeMap<String, String>>,

    /// Legacy switch. No longer meaningful; the pdfmark is always ASCII.
    pub ascii_docinfo: Option<bool>,
}

impl Default for PdfmarkConfig {
    fn default() -> Self {
        Self {
            icc: IccProfile::Srgb.identifier().to_string(),
            pdfmark: None,
            ascii_docinfo: None,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum PdfaError {
    /// A filesystem I/O error occurred while reading a PDF or writing a pdfmark.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be loaded as a PDF document.
    #[error("PDF parse error: {0}")]
    Parse(#[from] lopdf::Error),

    /// The catalog has a `/Metadata` entry but it cannot be read as a stream.
    #[error("Unreadable metadata: {0}")]
    Metadata(String),

    /// The XMP packet is not well-formed XML.
    #[error("XMP parse error: {0}")]
    Xmp(#[from] quick_xml::Error),

    /// The requested feature (e.g. an ICC profile other than sRGB) is not
    /// implemented.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The generated pdfmark contains a non-ASCII byte at this offset.
    #[error("pdfmark output is not ASCII (first non-ASCII byte at offset {0})")]
    NonAsciiOutput(usize),

    /// A claim could not be serialised to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A PDF date string could not be decoded.
    #[error("Invalid PDF date: {0}")]
    InvalidDate(String),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, PdfaError>;
