// src/aliases.rs
//! Secret wrappers built on secure-gate
//!
//! Anything derived from a caller's passphrase lives in one of these so the
//! bytes are wiped when the value drops.

pub use secure_gate::dynamic_alias;

// PBKDF2 output, sized to the algorithm's key length
dynamic_alias!(DerivedKey, Vec<u8>);
