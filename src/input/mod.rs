//! Input acquisition
//!
//! Reads the file variant of the input and decodes it to text:
//! - BOM detection (UTF-8, UTF-16 LE/BE)
//! - UTF-8 fast path with strict validation
//! - Fallback encoding detection using chardetng
//! - Binary file rejection
//!
//! Unreadable files are hard errors carrying the path; a failed read
//! never silently becomes empty input.

use anyhow::{bail, Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::path::Path;

const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];
const UTF16_LE_BOM: [u8; 2] = [0xff, 0xfe];
const UTF16_BE_BOM: [u8; 2] = [0xfe, 0xff];

/// Read `path` and decode its contents to text.
///
/// BOMs win over everything else, then strict UTF-8, then chardetng
/// detection with replacement characters for undecodable sequences.
/// Files that look binary (NUL bytes or mostly non-printable content)
/// are rejected rather than decoded into mojibake.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    decode_bytes(&bytes, path)
}

fn decode_bytes(bytes: &[u8], path: &Path) -> Result<String> {
    if bytes.is_empty() {
        return Ok(String::new());
    }

    // BOMs are checked before the binary heuristic: UTF-16 text is full
    // of NUL bytes.
    if let Some(encoding) = bom_encoding(bytes) {
        let (text, _) = encoding.decode_with_bom_removal(bytes);
        tracing::debug!(path = %path.display(), encoding = encoding.name(), "decoded via BOM");
        return Ok(text.into_owned());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    if looks_binary(bytes) {
        bail!("Refusing to count tokens in binary file: {}", path.display());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, actual, had_errors) = encoding.decode(bytes);
    tracing::debug!(
        path = %path.display(),
        encoding = actual.name(),
        had_errors,
        "decoded non-UTF-8 input"
    );
    Ok(text.into_owned())
}

fn bom_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.starts_with(&UTF8_BOM) {
        Some(UTF_8)
    } else if bytes.starts_with(&UTF16_LE_BOM) {
        Some(UTF_16LE)
    } else if bytes.starts_with(&UTF16_BE_BOM) {
        Some(UTF_16BE)
    } else {
        None
    }
}

/// Binary heuristics: NUL bytes, or less than 70% printable ASCII.
fn looks_binary(bytes: &[u8]) -> bool {
    if bytes.contains(&0) {
        return true;
    }

    let printable_count = bytes
        .iter()
        .filter(|&&b| {
            (32..=126).contains(&b) || b == 9 || b == 10 || b == 13 // printable + tab, LF, CR
        })
        .count();

    (printable_count as f64 / bytes.len() as f64) < 0.70
}
