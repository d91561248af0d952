//! Persisted form of the entry collection
//!
//! The stored value is `base64(uri_component_encode(json))`. It is an
//! obfuscating encoding, not encryption, and must stay byte-compatible with
//! data written by earlier versions of the journal.

use crate::domain::entry::Entry;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("malformed percent escape at byte {0}")]
    PercentEscape(usize),

    #[error("decoded text is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid entry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode the full collection for storage.
pub fn encode_entries(entries: &[Entry]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(entries)?;
    Ok(STANDARD.encode(encode_uri_component(&json)))
}

/// Exact inverse of [`encode_entries`].
pub fn decode_entries(stored: &str) -> Result<Vec<Entry>, DecodeError> {
    let ascii = STANDARD.decode(stored.trim())?;
    let json = decode_uri_component(&ascii)?;
    Ok(serde_json::from_str(&json)?)
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Percent-encode every UTF-8 byte outside the URI-component unreserved set.
fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0f) as usize] as char);
        }
    }
    out
}

fn decode_uri_component(input: &[u8]) -> Result<String, DecodeError> {
    let mut bytes = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if input[i] == b'%' {
            let hex = input
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or(DecodeError::PercentEscape(i))?;
            bytes.push(hex);
            i += 3;
        } else {
            bytes.push(input[i]);
            i += 1;
        }
    }
    Ok(String::from_utf8(bytes)?)
}
