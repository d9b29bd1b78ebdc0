//! String encoders for text that ends up inside PostScript or PDF strings.

use std::path::Path;

/// Encode `s` as the body of a PDF hex string: UTF-16BE with a byte order
/// mark, in lowercase hex.
///
/// Embedded NULs are dropped first; some producers leave them at the end of
/// Info strings. An input that is empty after stripping yields `""` (no BOM).
///
/// ```
/// # #![allow(deprecated)]
/// assert_eq!(pdfamark::encode_text_string("A"), "feff0041");
/// assert_eq!(pdfamark::encode_text_string("\0"), "");
/// ```
#[deprecated(
    since = "0.1.0",
    note = "encode Unicode metadata with the PDF library that writes the document"
)]
pub fn encode_text_string(s: &str) -> String {
    log::warn!("encode_text_string is deprecated");

    let s: String = s.chars().filter(|&c| c != '\0').collect();
    if s.is_empty() {
        return String::new();
    }

    let mut bytes = Vec::with_capacity(2 + s.len() * 2);
    bytes.extend_from_slice(&[0xfe, 0xff]);
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    hex::encode(bytes)
}

/// Reduce `s` to text that is safe inside a PostScript literal string.
///
/// `(`, `)`, `\` and NUL are removed; every other character outside printable
/// ASCII (0x20..=0x7E) becomes `?`.
///
/// ```
/// assert_eq!(pdfamark::encode_ascii("Café (draft)\\"), "Caf? draft");
/// ```
pub fn encode_ascii(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '(' | ')' | '\\' | '\0'))
        .map(|c| if matches!(c, ' '..='~') { c } else { '?' })
        .collect()
}

/// Wrap `bytes` in a PostScript hex string literal, e.g. `<2f746d70>`.
pub fn hex_string_literal(bytes: &[u8]) -> String {
    format!("<{}>", hex::encode(bytes))
}

/// Bytes of `path` in the platform's filesystem encoding.
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

/// Bytes of `path` in the platform's filesystem encoding.
///
/// Non-Unix paths are written as UTF-8, which is what Ghostscript expects for
/// file names there. Unpaired surrogates are replaced.
#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Vec<u8> {
    path.as_os_str().to_string_lossy().into_owned().into_bytes()
}
