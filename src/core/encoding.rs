//! Base64 helpers with explicit "no value" semantics
//!
//! Empty inputs map to `None` instead of an empty string so callers can tell
//! "nothing was produced" apart from a real value.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Standard base64; `None` for an empty slice
pub fn to_base64(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        None
    } else {
        Some(STANDARD.encode(bytes))
    }
}

/// Decode standard base64 into raw bytes
pub fn from_base64(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded)?)
}

/// Base64 of the UTF-8 bytes of `text`
pub fn to_base64_utf8(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode base64 and read it as UTF-8; `None` when there were no bytes
pub fn from_base64_utf8(encoded: &str) -> Result<Option<String>> {
    let bytes = from_base64(encoded)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8(bytes)?))
}

/// Trimmed length is a multiple of 4 and the text decodes cleanly
pub fn is_base64(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.len() % 4 == 0 && STANDARD.decode(trimmed).is_ok()
}
