//! Master-password key derivation.
//!
//! The key is the SHA-256 digest of the UTF-8 password bytes.  There is
//! no salt and no work factor: one password maps to exactly one key, so
//! every existing vault file stays readable with the same password.
//! Changing this transform changes every derived key.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE as BASE64_URL;
use base64::Engine;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{VaultError, Result};

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A 32-byte symmetric key that zeroes its memory when dropped.
///
/// Never printed: the `Debug` impl is redacted.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct Key {
    bytes: [u8; KEY_LEN],
}

impl Key {
    /// Create a `Key` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }

    /// URL-safe, padded base64 text form of the key.
    pub fn encoded(&self) -> Zeroizing<String> {
        Zeroizing::new(BASE64_URL.encode(self.bytes))
    }

    /// Parse the text form produced by [`Key::encoded`].
    pub fn from_encoded(text: &str) -> Result<Self> {
        let raw = Zeroizing::new(
            BASE64_URL
                .decode(text.trim())
                .map_err(|e| VaultError::InvalidInput(format!("key is not valid base64: {e}")))?,
        );
        if raw.len() != KEY_LEN {
            return Err(VaultError::InvalidInput(format!(
                "key must decode to exactly {KEY_LEN} bytes, got {}",
                raw.len()
            )));
        }
        let mut bytes = [0u8; KEY_LEN];
        bytes.copy_from_slice(&raw);
        Ok(Self::new(bytes))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(<redacted>)")
    }
}

/// Derive the vault key from a master password.
///
/// Deterministic and total: any text is accepted, including the empty
/// string.  Rejecting weak passwords is the caller's business.
pub fn derive_key(master_password: &str) -> Key {
    let digest = Sha256::digest(master_password.as_bytes());
    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&digest);
    Key::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest_for_empty_password() {
        // SHA-256("")
        let key = derive_key("");
        assert_eq!(
            key.as_bytes()[..4],
            [0xe3, 0xb0, 0xc4, 0x42],
            "empty password is legal and hashes like any other input"
        );
    }

    #[test]
    fn encoded_form_roundtrips() {
        let key = derive_key("Master123");
        let text = key.encoded();
        assert_eq!(text.len(), 44);
        assert!(text.ends_with('='));
        assert_eq!(Key::from_encoded(&text).unwrap(), key);
    }

    #[test]
    fn from_encoded_rejects_wrong_length() {
        let short = BASE64_URL.encode([1u8; 16]);
        assert!(Key::from_encoded(&short).is_err());
        assert!(Key::from_encoded("not base64 !!").is_err());
    }

    #[test]
    fn debug_does_not_leak_key_bytes() {
        let key = derive_key("hunter2");
        let shown = format!("{key:?}");
        assert_eq!(shown, "Key(<redacted>)");
    }
}
