// tests/core/encoding.rs
use secure_string_cipher::core::*;
use secure_string_cipher::error::CoreError;

#[test]
fn test_to_base64_empty_is_none() {
    assert_eq!(to_base64(b""), None);
    assert_eq!(to_base64(b"hello").as_deref(), Some("aGVsbG8="));
}

#[test]
fn test_from_base64_decodes_standard_alphabet() {
    assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
    assert!(from_base64("").unwrap().is_empty());
}

#[test]
fn test_from_base64_rejects_garbage() {
    let err = from_base64("not base64!").unwrap_err();
    assert!(matches!(err, CoreError::Base64(_)));
}

#[test]
fn test_utf8_helpers() {
    let encoded = to_base64_utf8("héllo wörld");
    assert_eq!(
        from_base64_utf8(&encoded).unwrap().as_deref(),
        Some("héllo wörld")
    );
    assert_eq!(from_base64_utf8("").unwrap(), None);
}

#[test]
fn test_from_base64_utf8_rejects_invalid_utf8() {
    // 0xff 0xfe
    let err = from_base64_utf8("//4=").unwrap_err();
    assert!(matches!(err, CoreError::Utf8(_)));
}

#[test]
fn test_is_base64() {
    assert!(is_base64("aGVsbG8="));
    assert!(is_base64("  aGVsbG8=  "));
    assert!(!is_base64("aGVsbG8"));
    assert!(!is_base64("!!!!"));
}
