use crate::claim::{classify_status, PdfaClaim};
use crate::metadata::MetadataReader;
use crate::xmp::read_pdfa_id;
use crate::Result;
use lopdf::Document;
use std::path::Path;

// ── PdfaInspector ────────────────────────────────────────────────────────────

/// Reads the PDF/A claim out of a loaded document.
///
/// # Creating an inspector
///
/// ```no_run
/// use pdfamark::PdfaInspector;
///
/// // From a file path
/// let a = PdfaInspector::from_path("output.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("output.pdf").unwrap();
/// let b = PdfaInspector::from_bytes(&bytes).unwrap();
///
/// assert_eq!(a.claim().unwrap(), b.claim().unwrap());
/// ```
pub struct PdfaInspector {
    document: Document,
}

impl PdfaInspector {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    ///
    /// Reading the file fails with [`PdfaError::Io`], parsing it with
    /// [`PdfaError::Parse`].
    ///
    /// [`PdfaError::Io`]: crate::PdfaError::Io
    /// [`PdfaError::Parse`]: crate::PdfaError::Parse
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            document: Document::load_mem(data)?,
        })
    }

    // ── Claim ─────────────────────────────────────────────────────────────────

    /// The raw XMP PDF/A status, e.g. `"2B"`.
    ///
    /// Empty when the document has no XMP, or its XMP lacks either
    /// `pdfaid:part` or `pdfaid:conformance`.
    pub fn pdfa_status(&self) -> Result<String> {
        let status = match MetadataReader::new(&self.document).read_xmp()? {
            Some(xmp) => read_pdfa_id(&xmp)?.status(),
            None => String::new(),
        };
        log::debug!("XMP PDF/A status: '{status}'");
        Ok(status)
    }

    /// Classify the PDF/A conformance this document claims.
    ///
    /// A document that claims nothing is `Ok` with `pass == false`; only a
    /// document whose metadata cannot be read is an `Err`.
    pub fn claim(&self) -> Result<PdfaClaim> {
        Ok(classify_status(&self.pdfa_status()?))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Determine whether the PDF at `path` claims PDF/A conformance.
///
/// This only looks for the XMP PDF/A marker. It does not validate the file.
///
/// ```no_run
/// let claim = pdfamark::file_claims_pdfa("output.pdf").unwrap();
/// if claim.pass {
///     println!("already {}", claim.conformance);
/// }
/// ```
pub fn file_claims_pdfa<P: AsRef<Path>>(path: P) -> Result<PdfaClaim> {
    PdfaInspector::from_path(path)?.claim()
}
