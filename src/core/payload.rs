//! Wire layout of an encrypted payload: `[salt?][iv][cipher]`
//!
//! There is no length prefix. Segment boundaries come from the block size
//! alone, so every helper here saturates on short input instead of
//! panicking; the cipher then rejects whatever it was handed.

/// Leading salt segment of a payload that embeds one
pub fn extract_salt(buffer: &[u8], block_byte_size: usize) -> &[u8] {
    segment(buffer, 0, block_byte_size)
}

/// IV segment: second block when a salt is embedded, first block otherwise
pub fn extract_iv(buffer: &[u8], block_byte_size: usize, has_embedded_salt: bool) -> &[u8] {
    let start = if has_embedded_salt {
        block_byte_size
    } else {
        0
    };
    segment(buffer, start, block_byte_size)
}

/// Everything after the salt (if embedded) and the IV
pub fn extract_cipher_bytes(
    buffer: &[u8],
    block_byte_size: usize,
    has_embedded_salt: bool,
) -> &[u8] {
    let skip = if has_embedded_salt {
        block_byte_size.saturating_mul(2)
    } else {
        block_byte_size
    };
    buffer.get(skip..).unwrap_or_default()
}

/// Concatenate `salt? ‖ iv ‖ cipher`
pub fn pack(salt: Option<&[u8]>, iv: &[u8], cipher_bytes: &[u8]) -> Vec<u8> {
    let salt = salt.unwrap_or_default();
    let mut out = Vec::with_capacity(salt.len() + iv.len() + cipher_bytes.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(iv);
    out.extend_from_slice(cipher_bytes);
    out
}

fn segment(buffer: &[u8], start: usize, len: usize) -> &[u8] {
    let start = start.min(buffer.len());
    let end = start.saturating_add(len).min(buffer.len());
    &buffer[start..end]
}
