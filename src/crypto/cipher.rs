//! Per-field authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! stamps the current time, then packs everything into one URL-safe
//! base64 token so callers never track nonces themselves.
//!
//! Token bytes (before base64):
//!   [ version: 1 | issued_at: u64 BE | nonce: 12 | ciphertext + 16-byte tag ]
//!
//! The version byte and timestamp are authenticated as associated data,
//! so altering either one makes `decrypt` fail.

use aes_gcm::aead::{Aead, KeyInit, OsRng, Payload};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::URL_SAFE as BASE64_URL;
use base64::Engine;
use chrono::Utc;
use zeroize::Zeroize;

use super::kdf::Key;
use crate::errors::{VaultError, Result};

/// Leading byte of every token.
const TOKEN_VERSION: u8 = 0x81;

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
const TAG_LEN: usize = 16;

/// version (1) + issued_at (8).
const HEADER_LEN: usize = 9;

/// Encrypt one text field under `key`, returning a self-contained token.
pub fn encrypt(plaintext: &str, key: &Key) -> Result<String> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::Encryption(format!("invalid key length: {e}")))?;

    let issued_at = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
    let mut header = [0u8; HEADER_LEN];
    header[0] = TOKEN_VERSION;
    header[1..].copy_from_slice(&issued_at.to_be_bytes());

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(
            &nonce,
            Payload {
                msg: plaintext.as_bytes(),
                aad: &header,
            },
        )
        .map_err(|e| VaultError::Encryption(format!("encryption error: {e}")))?;

    let mut raw = Vec::with_capacity(HEADER_LEN + NONCE_LEN + ciphertext.len());
    raw.extend_from_slice(&header);
    raw.extend_from_slice(&nonce);
    raw.extend_from_slice(&ciphertext);

    Ok(BASE64_URL.encode(raw))
}

/// Decrypt a token produced by [`encrypt`].
///
/// Any failure (bad base64, short token, unknown version, wrong key,
/// flipped bit, non-UTF-8 plaintext) is `VaultError::Decryption`.
pub fn decrypt(token: &str, key: &Key) -> Result<String> {
    let raw = BASE64_URL
        .decode(token.as_bytes())
        .map_err(|_| VaultError::Decryption)?;

    if raw.len() < HEADER_LEN + NONCE_LEN + TAG_LEN || raw[0] != TOKEN_VERSION {
        return Err(VaultError::Decryption);
    }

    let (header, rest) = raw.split_at(HEADER_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VaultError::Decryption)?;

    let plaintext = cipher
        .decrypt(
            nonce,
            Payload {
                msg: ciphertext,
                aad: header,
            },
        )
        .map_err(|_| VaultError::Decryption)?;

    // On error, wipe the bytes inside the error before discarding.
    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        VaultError::Decryption
    })
}
