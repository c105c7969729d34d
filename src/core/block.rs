//! Concrete block ciphers behind one tagged union
//!
//! `BlockAlgorithm` maps an `EncryptionMethod` plus derived key bytes onto a
//! RustCrypto cipher, then applies the requested chaining mode and padding.
//!
//! Supported matrix:
//! - AES: 128/192/256-bit keys, 128-bit block
//! - DES: 64-bit key, 64-bit block
//! - TripleDES: 128-bit (EDE2) or 192-bit (EDE3) keys, 64-bit block
//! - RC2: 40..=128-bit keys in 8-bit steps, 64-bit block
//! - Modes: CBC, ECB, CFB (8-bit feedback). OFB and CTS are refused.
//!
//! In CFB mode the padding unit is the 1-byte feedback segment, not the
//! cipher block.

use aes::{Aes128, Aes192, Aes256};
use cipher::block_padding::{AnsiX923, Iso10126, NoPadding, Pkcs7, ZeroPadding};
use cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, InnerIvInit, KeyInit};
use des::{Des, TdesEde2, TdesEde3};
use rc2::Rc2;

use crate::enums::{CipherMode, EncryptionMethod, PaddingMode};
use crate::error::{CoreError, Result};
use crate::options::AlgorithmOptions;

pub(crate) enum BlockAlgorithm {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
    Des(Des),
    TdesEde2(TdesEde2),
    TdesEde3(TdesEde3),
    Rc2(Rc2),
}

macro_rules! with_cipher {
    ($algorithm:expr, $cipher:ident => $body:expr) => {
        match $algorithm {
            BlockAlgorithm::Aes128($cipher) => $body,
            BlockAlgorithm::Aes192($cipher) => $body,
            BlockAlgorithm::Aes256($cipher) => $body,
            BlockAlgorithm::Des($cipher) => $body,
            BlockAlgorithm::TdesEde2($cipher) => $body,
            BlockAlgorithm::TdesEde3($cipher) => $body,
            BlockAlgorithm::Rc2($cipher) => $body,
        }
    };
}

impl BlockAlgorithm {
    /// Reject option sets the cipher layer could never honour.
    ///
    /// Runs before key derivation so bad options fail without paying for
    /// PBKDF2.
    pub(crate) fn validate(method: EncryptionMethod, options: &AlgorithmOptions) -> Result<()> {
        let native_block = native_block_size(method)?;
        let key_size = options.key_size();
        let block_size = options.block_size();

        if block_size != native_block {
            return Err(CoreError::InvalidOptions(format!(
                "{method} requires a {native_block}-bit block size, got {block_size}"
            )));
        }
        if key_size % 8 != 0 || !key_size_supported(method, key_size) {
            return Err(CoreError::InvalidOptions(format!(
                "{key_size}-bit keys are not supported by {method}"
            )));
        }
        if options.derivation_iterations() == 0 {
            return Err(CoreError::InvalidOptions(
                "derivation iterations must be positive".into(),
            ));
        }
        match options.cipher_mode() {
            CipherMode::Cbc | CipherMode::Ecb | CipherMode::Cfb => Ok(()),
            mode @ (CipherMode::Ofb | CipherMode::Cts) => Err(CoreError::InvalidOptions(format!(
                "cipher mode {mode} is not supported"
            ))),
        }
    }

    pub(crate) fn new(method: EncryptionMethod, key: &[u8]) -> Result<Self> {
        let algorithm = match (method, key.len()) {
            (EncryptionMethod::Aes, 16) => Self::Aes128(Aes128::new_from_slice(key)?),
            (EncryptionMethod::Aes, 24) => Self::Aes192(Aes192::new_from_slice(key)?),
            (EncryptionMethod::Aes, 32) => Self::Aes256(Aes256::new_from_slice(key)?),
            (EncryptionMethod::Des, 8) => Self::Des(Des::new_from_slice(key)?),
            (EncryptionMethod::TripleDes, 16) => Self::TdesEde2(TdesEde2::new_from_slice(key)?),
            (EncryptionMethod::TripleDes, 24) => Self::TdesEde3(TdesEde3::new_from_slice(key)?),
            (EncryptionMethod::Rc2, 5..=16) => {
                Self::Rc2(Rc2::new_with_eff_key_len(key, key.len() * 8))
            }
            (EncryptionMethod::NotSet, _) => return Err(CoreError::method_not_set()),
            (_, len) => {
                return Err(CoreError::InvalidOptions(format!(
                    "{}-bit keys are not supported by {method}",
                    len * 8
                )))
            }
        };
        Ok(algorithm)
    }

    pub(crate) fn encrypt(
        self,
        mode: CipherMode,
        padding: PaddingMode,
        iv: &[u8],
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        with_cipher!(self, cipher => encrypt_with(cipher, mode, padding, iv, plaintext))
    }

    pub(crate) fn decrypt(
        self,
        mode: CipherMode,
        padding: PaddingMode,
        iv: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        with_cipher!(self, cipher => decrypt_with(cipher, mode, padding, iv, ciphertext))
    }
}

fn native_block_size(method: EncryptionMethod) -> Result<u32> {
    match method {
        EncryptionMethod::Aes => Ok(128),
        EncryptionMethod::Des | EncryptionMethod::Rc2 | EncryptionMethod::TripleDes => Ok(64),
        EncryptionMethod::NotSet => Err(CoreError::method_not_set()),
    }
}

fn key_size_supported(method: EncryptionMethod, bits: u32) -> bool {
    match method {
        EncryptionMethod::Aes => matches!(bits, 128 | 192 | 256),
        EncryptionMethod::Des => bits == 64,
        EncryptionMethod::TripleDes => matches!(bits, 128 | 192),
        EncryptionMethod::Rc2 => (40..=128).contains(&bits),
        EncryptionMethod::NotSet => false,
    }
}

fn encrypt_with<C>(
    cipher: C,
    mode: CipherMode,
    padding: PaddingMode,
    iv: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockEncryptMut,
{
    match mode {
        CipherMode::Cbc => {
            let encryptor = cbc::Encryptor::<C>::inner_iv_slice_init(cipher, iv)?;
            pad_and_encrypt(encryptor, padding, plaintext)
        }
        // ECB ignores the IV; it still travels in the payload
        CipherMode::Ecb => pad_and_encrypt(cipher, padding, plaintext),
        CipherMode::Cfb => {
            let encryptor = cfb8::Encryptor::<C>::inner_iv_slice_init(cipher, iv)?;
            pad_and_encrypt(encryptor, padding, plaintext)
        }
        CipherMode::Ofb | CipherMode::Cts => Err(CoreError::InvalidOptions(format!(
            "cipher mode {mode} is not supported"
        ))),
    }
}

fn decrypt_with<C>(
    cipher: C,
    mode: CipherMode,
    padding: PaddingMode,
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut,
{
    match mode {
        CipherMode::Cbc => {
            let decryptor = cbc::Decryptor::<C>::inner_iv_slice_init(cipher, iv)?;
            unpad_and_decrypt(decryptor, padding, ciphertext)
        }
        CipherMode::Ecb => unpad_and_decrypt(cipher, padding, ciphertext),
        // CFB runs the block cipher forwards in both directions
        CipherMode::Cfb => {
            let decryptor = cfb8::Decryptor::<C>::inner_iv_slice_init(cipher, iv)?;
            unpad_and_decrypt(decryptor, padding, ciphertext)
        }
        CipherMode::Ofb | CipherMode::Cts => Err(CoreError::InvalidOptions(format!(
            "cipher mode {mode} is not supported"
        ))),
    }
}

fn pad_and_encrypt<M: BlockEncryptMut>(
    mode: M,
    padding: PaddingMode,
    data: &[u8],
) -> Result<Vec<u8>> {
    let out = match padding {
        PaddingMode::None => {
            let block_size = M::block_size();
            if data.len() % block_size != 0 {
                return Err(CoreError::Cipher(format!(
                    "input length {} is not a multiple of the {block_size}-byte block",
                    data.len()
                )));
            }
            mode.encrypt_padded_vec_mut::<NoPadding>(data)
        }
        PaddingMode::Pkcs7 => mode.encrypt_padded_vec_mut::<Pkcs7>(data),
        PaddingMode::Zeros => mode.encrypt_padded_vec_mut::<ZeroPadding>(data),
        PaddingMode::AnsiX923 => mode.encrypt_padded_vec_mut::<AnsiX923>(data),
        PaddingMode::Iso10126 => mode.encrypt_padded_vec_mut::<Iso10126>(data),
    };
    Ok(out)
}

fn unpad_and_decrypt<M: BlockDecryptMut>(
    mode: M,
    padding: PaddingMode,
    data: &[u8],
) -> Result<Vec<u8>> {
    let out = match padding {
        PaddingMode::None => mode.decrypt_padded_vec_mut::<NoPadding>(data)?,
        PaddingMode::Pkcs7 => mode.decrypt_padded_vec_mut::<Pkcs7>(data)?,
        PaddingMode::Zeros => mode.decrypt_padded_vec_mut::<ZeroPadding>(data)?,
        PaddingMode::AnsiX923 => mode.decrypt_padded_vec_mut::<AnsiX923>(data)?,
        PaddingMode::Iso10126 => mode.decrypt_padded_vec_mut::<Iso10126>(data)?,
    };
    Ok(out)
}
