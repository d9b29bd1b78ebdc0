// Text encoders and the legacy date helpers.

#![allow(deprecated)]

use chrono::{FixedOffset, TimeZone};
use pdfamark::{decode_pdf_date, encode_ascii, encode_pdf_date, encode_text_string, PdfaError};
use proptest::prelude::*;

fn decode_text_string(hex_str: &str) -> String {
    let bytes = hex::decode(hex_str).unwrap();
    assert_eq!(&bytes[..2], &[0xfe, 0xff], "missing byte order mark");
    let units: Vec<u16> = bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).unwrap()
}

// ── encode_text_string ────────────────────────────────────────────────────────

#[test]
fn text_string_known_values() {
    assert_eq!(encode_text_string("Hi"), "feff00480069");
    assert_eq!(encode_text_string("é"), "feff00e9");
    assert_eq!(encode_text_string(""), "");
}

#[test]
fn text_string_drops_trailing_nuls() {
    assert_eq!(encode_text_string("aspect\0\0"), encode_text_string("aspect"));
    assert_eq!(encode_text_string("\0\0"), "");
}

proptest! {
    #[test]
    fn text_string_recovers_input_without_nuls(s in any::<String>()) {
        let expected: String = s.chars().filter(|&c| c != '\0').collect();
        let encoded = encode_text_string(&s);

        prop_assert!(encoded.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        if expected.is_empty() {
            prop_assert_eq!(encoded, "");
        } else {
            prop_assert_eq!(decode_text_string(&encoded), expected);
        }
    }

    #[test]
    fn ascii_output_is_printable_and_unescaped(s in any::<String>()) {
        let out = encode_ascii(&s);
        for b in out.bytes() {
            prop_assert!((0x20..=0x7e).contains(&b), "byte {:#04x} in {:?}", b, out);
            prop_assert!(!matches!(b, b'(' | b')' | b'\\'), "special byte in {:?}", out);
        }
    }

    #[test]
    fn ascii_leaves_safe_text_alone(s in "[A-Za-z0-9 ./_-]*") {
        prop_assert_eq!(encode_ascii(&s), s);
    }
}

// ── encode_ascii ──────────────────────────────────────────────────────────────

#[test]
fn ascii_replaces_each_non_ascii_character_once() {
    assert_eq!(encode_ascii("naïve 日本"), "na?ve ??");
}

#[test]
fn ascii_strips_postscript_delimiters() {
    assert_eq!(encode_ascii(r"(a\b)c"), "abc");
    assert_eq!(encode_ascii("nul\0byte"), "nulbyte");
}

// ── PDF dates ─────────────────────────────────────────────────────────────────

#[test]
fn encodes_positive_and_negative_offsets() {
    let cet = FixedOffset::east_opt(3600).unwrap();
    let date = cet.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    assert_eq!(encode_pdf_date(&date), "D:20240115103000+01'00'");

    let nst = FixedOffset::west_opt(3 * 3600 + 30 * 60).unwrap();
    let date = nst.with_ymd_and_hms(1999, 12, 31, 23, 59, 58).unwrap();
    assert_eq!(encode_pdf_date(&date), "D:19991231235958-03'30'");
}

#[test]
fn decodes_what_it_encodes() {
    let offset = FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap();
    let date = offset.with_ymd_and_hms(2021, 6, 1, 8, 0, 5).unwrap();
    assert_eq!(decode_pdf_date(&encode_pdf_date(&date)).unwrap(), date);
}

#[test]
fn decodes_utc_spellings() {
    let utc = FixedOffset::east_opt(0).unwrap();
    let expected = utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

    for s in [
        "D:20240115103000Z",
        "D:20240115103000Z00'00'",
        "D:20240115103000+00'00'",
        "20240115103000",
    ] {
        let decoded = decode_pdf_date(s).unwrap();
        assert_eq!(decoded, expected, "{s}");
        assert_eq!(decoded.offset().local_minus_utc(), 0, "{s}");
    }
}

#[test]
fn rejects_incomplete_dates() {
    for s in ["D:2024", "D:", "yesterday"] {
        let err = decode_pdf_date(s).unwrap_err();
        assert!(matches!(err, PdfaError::InvalidDate(_)), "{s}: {err:?}");
    }
}
