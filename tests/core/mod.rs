// tests/core/mod.rs

#[cfg(test)]
mod crypto;
#[cfg(test)]
mod encoding;
#[cfg(test)]
mod kdf;
#[cfg(test)]
mod payload;
#[cfg(test)]
mod util;
