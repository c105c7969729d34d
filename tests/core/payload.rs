// tests/core/payload.rs
use secure_string_cipher::core::*;

fn sample() -> Vec<u8> {
    // salt (4) | iv (4) | cipher (6)
    (0u8..14).collect()
}

#[test]
fn test_segments_with_embedded_salt() {
    let buf = sample();
    assert_eq!(extract_salt(&buf, 4), &[0, 1, 2, 3]);
    assert_eq!(extract_iv(&buf, 4, true), &[4, 5, 6, 7]);
    assert_eq!(extract_cipher_bytes(&buf, 4, true), &[8, 9, 10, 11, 12, 13]);
}

#[test]
fn test_segments_without_embedded_salt() {
    let buf = sample();
    assert_eq!(extract_iv(&buf, 4, false), &[0, 1, 2, 3]);
    assert_eq!(
        extract_cipher_bytes(&buf, 4, false),
        &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13]
    );
}

#[test]
fn test_short_buffers_saturate_instead_of_panicking() {
    let buf = [1u8, 2, 3];
    assert_eq!(extract_salt(&buf, 8), &[1, 2, 3]);
    assert!(extract_iv(&buf, 8, true).is_empty());
    assert!(extract_cipher_bytes(&buf, 8, true).is_empty());
    assert!(extract_cipher_bytes(&[], 8, false).is_empty());
}

#[test]
fn test_pack_layout() {
    let packed = pack(Some(&[1, 1]), &[2, 2], &[3, 3, 3]);
    assert_eq!(packed, vec![1, 1, 2, 2, 3, 3, 3]);

    let packed = pack(None, &[2, 2], &[3]);
    assert_eq!(packed, vec![2, 2, 3]);
}

#[test]
fn test_pack_then_extract_recovers_segments() {
    let salt = [9u8; 8];
    let iv = [7u8; 8];
    let cipher = [5u8; 16];
    let packed = pack(Some(&salt), &iv, &cipher);

    assert_eq!(extract_salt(&packed, 8), &salt);
    assert_eq!(extract_iv(&packed, 8, true), &iv);
    assert_eq!(extract_cipher_bytes(&packed, 8, true), &cipher);
}
