//! PDF date strings (`D:YYYYMMDDHHmmSSOHH'mm'`).

use crate::{PdfaError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

/// Encode a timestamp as a PDF date string, e.g. `D:20240115103000+01'00'`.
#[deprecated(
    since = "0.1.0",
    note = "write document dates with the PDF library that writes the document"
)]
pub fn encode_pdf_date(date: &DateTime<FixedOffset>) -> String {
    log::warn!("encode_pdf_date is deprecated");

    let offset = date.offset().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let minutes = offset.abs() / 60;
    format!(
        "D:{}{}{:02}'{:02}'",
        date.format("%Y%m%d%H%M%S"),
        sign,
        minutes / 60,
        minutes % 60
    )
}

/// Decode a PDF date string.
///
/// The `D:` prefix is optional. A trailing `Z` (or the malformed but common
/// `Z00'00'`) means UTC, and a date with no offset at all is taken as UTC.
#[deprecated(
    since = "0.1.0",
    note = "read document dates with the PDF library that reads the document"
)]
pub fn decode_pdf_date(s: &str) -> Result<DateTime<FixedOffset>> {
    log::warn!("decode_pdf_date is deprecated");

    let body = s.strip_prefix("D:").unwrap_or(s);
    let body = if let Some(head) = body.strip_suffix("Z00'00'") {
        format!("{head}+0000")
    } else if let Some(head) = body.strip_suffix('Z') {
        format!("{head}+0000")
    } else {
        body.to_string()
    };
    let body = body.replace('\'', "");

    if let Ok(date) = DateTime::<FixedOffset>::parse_from_str(&body, "%Y%m%d%H%M%S%z") {
        return Ok(date);
    }

    let naive = NaiveDateTime::parse_from_str(&body, "%Y%m%d%H%M%S")
        .map_err(|e| PdfaError::InvalidDate(format!("'{s}': {e}")))?;
    FixedOffset::east_opt(0)
        .and_then(|utc| utc.from_local_datetime(&naive).single())
        .ok_or_else(|| PdfaError::InvalidDate(format!("'{s}': out of range")))
}
