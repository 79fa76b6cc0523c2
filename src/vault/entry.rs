//! `Entry` and `EncryptedRecord` types.
//!
//! An `Entry` is always fully decrypted; an `EncryptedRecord` holds one
//! authenticated token per field.  The two are converted only by the
//! record store, one field at a time.

use serde::{Deserialize, Serialize};

use crate::crypto::{decrypt, encrypt, Key};
use crate::errors::{VaultError, Result};

/// A single decrypted site/username/password record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The service identifier (e.g. "gmail.com").  Never blank.
    pub site: String,

    /// Account identifier for that site.
    pub username: String,

    /// The secret value.
    pub password: String,
}

impl Entry {
    /// Build an entry, rejecting an empty or whitespace-only site.
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let site = site.into();
        if site.trim().is_empty() {
            return Err(VaultError::InvalidInput("site cannot be empty".into()));
        }
        Ok(Self {
            site,
            username: username.into(),
            password: password.into(),
        })
    }

    /// Encrypt every field into its on-disk form.
    pub fn seal(&self, key: &Key) -> Result<EncryptedRecord> {
        Ok(EncryptedRecord {
            site: encrypt(&self.site, key)?,
            username: encrypt(&self.username, key)?,
            password: encrypt(&self.password, key)?,
        })
    }
}

/// On-disk counterpart of an `Entry`: each field is an opaque token.
///
/// Unknown extra fields are ignored on read; a missing field makes the
/// whole document invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedRecord {
    pub site: String,
    pub username: String,
    pub password: String,
}

impl EncryptedRecord {
    /// Decrypt all three fields.  Fails closed on the first bad token.
    pub fn open(&self, key: &Key) -> Result<Entry> {
        Ok(Entry {
            site: decrypt(&self.site, key)?,
            username: decrypt(&self.username, key)?,
            password: decrypt(&self.password, key)?,
        })
    }
}
