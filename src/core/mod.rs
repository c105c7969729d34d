// src/core/mod.rs
pub(crate) mod block;
pub mod crypto;
pub mod encoding;
pub mod kdf;
pub mod payload;
pub mod util;

pub use crypto::*;
pub use encoding::*;
pub use kdf::*;
pub use payload::*;
pub use util::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
