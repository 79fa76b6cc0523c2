//! Record store: plaintext entries in, encrypted vault file out.
//!
//! `RecordStore` owns the vault file and the session key.  It holds no
//! copy of the entries between calls; every operation re-reads the file
//! so the caller always sees what is on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::crypto::Key;
use crate::errors::Result;

use super::entry::{EncryptedRecord, Entry};
use super::format;

/// Durable mapping between `Entry` values and the encrypted vault file.
pub struct RecordStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// The session key (zeroized on drop).
    key: Key,
}

impl RecordStore {
    /// Bind a store to `path` with an already derived key.
    ///
    /// Nothing is read or written until the first operation.
    pub fn new(path: impl Into<PathBuf>, key: Key) -> Self {
        Self {
            path: path.into(),
            key,
        }
    }

    /// Read and decrypt every entry, in file order.
    ///
    /// A missing file yields an empty list.  A wrong key surfaces as
    /// `VaultError::Decryption` on the first field it touches.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let records = format::read_records(&self.path)?;
        let entries = records
            .iter()
            .map(|r| r.open(&self.key))
            .collect::<Result<Vec<_>>>()?;

        debug!(path = %self.path.display(), count = entries.len(), "loaded vault");
        Ok(entries)
    }

    /// Encrypt `entry` and append it, rewriting the whole file.
    pub fn append(&self, entry: &Entry) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(entry.clone());
        self.overwrite(&entries)
    }

    /// Remove every entry whose site equals `site` exactly.
    ///
    /// Returns how many were removed.  When nothing matches the file is
    /// left untouched and the result is `0`.
    pub fn remove_by_site(&self, site: &str) -> Result<usize> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.site != site);
        let removed = before - entries.len();

        if removed > 0 {
            self.overwrite(&entries)?;
        }
        debug!(path = %self.path.display(), removed, "remove by site");
        Ok(removed)
    }

    /// Encrypt and write `entries`, replacing the file unconditionally.
    pub fn overwrite(&self, entries: &[Entry]) -> Result<()> {
        let records = entries
            .iter()
            .map(|e| e.seal(&self.key))
            .collect::<Result<Vec<EncryptedRecord>>>()?;

        format::write_records(&self.path, &records)?;
        debug!(path = %self.path.display(), count = records.len(), "wrote vault");
        Ok(())
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
