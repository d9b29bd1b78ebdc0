use serde::Serialize;
use std::fmt;

/// Conformance string reported when the XMP carries no PDF/A identification.
pub const NO_PDFA_METADATA: &str = "No PDF/A metadata in XMP";

// ── PdfaLevel ────────────────────────────────────────────────────────────────

/// A PDF/A part and conformance level recognised by the claim checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfaLevel {
    A1a,
    A1b,
    A2a,
    A2b,
    A2u,
    A3a,
    A3b,
    A3u,
}

impl PdfaLevel {
    pub const ALL: [PdfaLevel; 8] = [
        Self::A1a,
        Self::A1b,
        Self::A2a,
        Self::A2b,
        Self::A2u,
        Self::A3a,
        Self::A3b,
        Self::A3u,
    ];

    /// Parse an XMP status such as `"2B"` (part followed by conformance).
    ///
    /// Matching is exact: `"2b"` and `"4"` are not recognised.
    pub fn from_status(status: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.status() == status)
    }

    /// The XMP status code, e.g. `"2B"`.
    pub fn status(self) -> &'static str {
        match self {
            Self::A1a => "1A",
            Self::A1b => "1B",
            Self::A2a => "2A",
            Self::A2b => "2B",
            Self::A2u => "2U",
            Self::A3a => "3A",
            Self::A3b => "3B",
            Self::A3u => "3U",
        }
    }

    /// The PDF/A part number (1, 2 or 3).
    pub fn part(self) -> u8 {
        match self {
            Self::A1a | Self::A1b => 1,
            Self::A2a | Self::A2b | Self::A2u => 2,
            Self::A3a | Self::A3b | Self::A3u => 3,
        }
    }
}

impl fmt::Display for PdfaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF/A-{}", self.status())
    }
}

// ── OutputKind ───────────────────────────────────────────────────────────────

/// What a conversion pipeline should treat the file as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Pdf,
    Pdfa,
}

impl OutputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Pdfa => "pdfa",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PdfaClaim ────────────────────────────────────────────────────────────────

/// The PDF/A conformance a document claims in its XMP metadata.
///
/// Serialises as `{"pass": .., "output": "pdf"|"pdfa", "conformance": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfaClaim {
    /// `true` only for one of the recognised [`PdfaLevel`]s.
    pub pass: bool,

    pub output: OutputKind,

    /// `"PDF/A-<status>"`, or [`NO_PDFA_METADATA`] when nothing is claimed.
    pub conformance: String,

    /// The recognised level, when `pass` is `true`.
    #[serde(skip)]
    pub level: Option<PdfaLevel>,
}

impl PdfaClaim {
    /// Pretty-printed JSON record of the claim.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn no_metadata() -> Self {
        Self {
            pass: false,
            output: OutputKind::Pdf,
            conformance: NO_PDFA_METADATA.to_string(),
            level: None,
        }
    }
}

/// Classify a raw XMP PDF/A status (`pdfaid:part` + `pdfaid:conformance`).
///
/// An unrecognised status such as `"4"` or `"1X"` still reports
/// `"PDF/A-<status>"` but does not pass.
///
/// ```
/// use pdfamark::{classify_status, OutputKind};
///
/// let claim = classify_status("3U");
/// assert!(claim.pass);
/// assert_eq!(claim.output, OutputKind::Pdfa);
/// assert_eq!(claim.conformance, "PDF/A-3U");
///
/// assert!(!classify_status("").pass);
/// ```
pub fn classify_status(status: &str) -> PdfaClaim {
    if status.is_empty() {
        return PdfaClaim::no_metadata();
    }

    let conformance = format!("PDF/A-{status}");
    match PdfaLevel::from_status(status) {
        Some(level) => PdfaClaim {
            pass: true,
            output: OutputKind::Pdfa,
            conformance,
            level: Some(level),
        },
        None => {
            log::debug!("unrecognised PDF/A status '{status}'");
            PdfaClaim {
                pass: false,
                output: OutputKind::Pdf,
                conformance,
                level: None,
            }
        }
    }
}
