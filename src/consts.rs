// src/consts.rs
//! Shared constants: algorithm defaults and wire-level sizes

/// PBKDF2 iterations used by every algorithm default
pub const DEFAULT_DERIVATION_ITERATIONS: u32 = 5_000;

/// AES: 256-bit key, 128-bit block
pub const AES_DEFAULT_KEY_SIZE: u32 = 256;
pub const AES_DEFAULT_BLOCK_SIZE: u32 = 128;

/// DES: 64-bit key (56 effective + parity), 64-bit block
pub const DES_DEFAULT_KEY_SIZE: u32 = 64;
pub const DES_DEFAULT_BLOCK_SIZE: u32 = 64;

/// RC2: 128-bit key, 64-bit block
pub const RC2_DEFAULT_KEY_SIZE: u32 = 128;
pub const RC2_DEFAULT_BLOCK_SIZE: u32 = 64;

/// TripleDES: three-key EDE, 64-bit block
pub const TRIPLE_DES_DEFAULT_KEY_SIZE: u32 = 192;
pub const TRIPLE_DES_DEFAULT_BLOCK_SIZE: u32 = 64;

/// SHA-256 digest length, the upper bound for salts derived from a salt string
pub const SHA256_DIGEST_LEN: usize = 32;

/// Printable ASCII range used by `generate_random_string`
pub const RANDOM_STRING_CHARS: std::ops::RangeInclusive<u8> = 33..=126;

pub const CONTENT_TYPE_TEXT: &str = "text/plain";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;
