//! Ghostscript pdfmark prologue for PDF/A conversion.
//!
//! Ghostscript reads this file before the input PDF when run with `-dPDFA`.
//! It declares the ICC profile stream, an OutputIntent dictionary that points
//! at it, and attaches the OutputIntent to the document catalog.
//!
//! The profile path is embedded as a hex string literal so that installs under
//! non-ASCII directories still produce an ASCII-only file. Ghostscript 9.24+
//! does not reliably accept UTF-16 in pdfmark strings, so nothing but ASCII is
//! ever written.

use crate::encoding::{encode_ascii, hex_string_literal, path_bytes};
use crate::icc::IccProfile;
use crate::{PdfaError, PdfmarkConfig, Result};
use std::path::Path;

const ICC_PROFILE_VAR: &str = "$icc_profile";
const ICC_IDENTIFIER_VAR: &str = "$icc_identifier";

const PDFA_DEF_TEMPLATE: &str = r"%!
% Define entries in the document Info dictionary :
/ICCProfile $icc_profile
def

% Define an ICC profile :

[/_objdef {icc_PDFA} /type /stream /OBJ pdfmark
[{icc_PDFA}
<<
  /N currentpagedevice /ProcessColorModel known {
    currentpagedevice /ProcessColorModel get dup /DeviceGray eq
    {pop 1} {
      /DeviceRGB eq
      {3}{4} ifelse
    } ifelse
  } {
    (ERROR, unable to determine ProcessColorModel) == flush
  } ifelse
>> /PUT pdfmark
[{icc_PDFA} ICCProfile (r) file /PUT pdfmark

% Define the output intent dictionary :

[/_objdef {OutputIntent_PDFA} /type /dict /OBJ pdfmark
[{OutputIntent_PDFA} <<
  /Type /OutputIntent             % Required by PDF/A.
  /S /GTS_PDFA1                   % Required by PDF/A.
  /DestOutputProfile {icc_PDFA}   % The stream declared above.
  /OutputConditionIdentifier ($icc_identifier)
>> /PUT pdfmark
[{Catalog} <</OutputIntents [ {OutputIntent_PDFA} ]>> /PUT pdfmark
";

/// Render the pdfmark prologue.
///
/// `icc_profile` is substituted verbatim and must already be a PostScript
/// string token (see [`hex_string_literal`]). `icc_identifier` is reduced to
/// safe ASCII with [`encode_ascii`] because it lands inside `( )`.
///
/// ```
/// let ps = pdfamark::pdfa_def("<2f>", "sRGB");
/// assert!(ps.starts_with("%!"));
/// assert!(ps.contains("/ICCProfile <2f>"));
/// assert!(ps.contains("/OutputConditionIdentifier (sRGB)"));
/// ```
pub fn pdfa_def(icc_profile: &str, icc_identifier: &str) -> String {
    PDFA_DEF_TEMPLATE
        .replace(ICC_PROFILE_VAR, icc_profile)
        .replace(ICC_IDENTIFIER_VAR, &encode_ascii(icc_identifier))
}

/// Write the pdfmark prologue for `config.icc` to `target`.
///
/// The file is created or truncated. An unsupported ICC identifier fails with
/// [`PdfaError::NotImplemented`] before anything is written. The legacy
/// `pdfmark` and `ascii_docinfo` options are ignored.
///
/// # Example
///
/// ```no_run
/// use pdfamark::{generate_pdfa_ps, PdfmarkConfig};
///
/// generate_pdfa_ps("/tmp/pdfa_def.ps", &PdfmarkConfig::default()).unwrap();
/// // gs -dPDFA=2 -dPDFACompatibilityPolicy=1 ... /tmp/pdfa_def.ps input.pdf
/// ```
pub fn generate_pdfa_ps<P: AsRef<Path>>(target: P, config: &PdfmarkConfig) -> Result<()> {
    let profile = IccProfile::from_identifier(&config.icc)?;

    if config.pdfmark.is_some() || config.ascii_docinfo.is_some() {
        log::debug!("ignoring legacy pdfmark/ascii_docinfo options");
    }

    warn_if_missing(profile.path());

    // Always hex, even for ASCII paths, so the rare case takes the same route.
    let icc_literal = hex_string_literal(&path_bytes(profile.path()));
    let ps = pdfa_def(&icc_literal, profile.identifier());

    if let Some(offset) = ps.bytes().position(|b| !b.is_ascii()) {
        return Err(PdfaError::NonAsciiOutput(offset));
    }

    let target = target.as_ref();
    std::fs::write(target, ps)?;
    log::debug!("wrote pdfmark for {} to {}", profile.identifier(), target.display());
    Ok(())
}

/// Warn when the profile file is absent. Ghostscript opens it only at
/// conversion time. Returns `true` if it is missing.
fn warn_if_missing(profile: &Path) -> bool {
    if profile.is_file() {
        return false;
    }
    log::warn!(
        "ICC profile {} does not exist; set {} to the directory holding {}",
        profile.display(),
        crate::icc::DATA_DIR_ENV,
        crate::icc::ICC_PROFILE_RELPATH
    );
    true
}
