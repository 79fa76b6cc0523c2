//! High-level vault operations used by the CLI.
//!
//! `VaultManager` is constructed once per session, after the master
//! password has been turned into a key, and handed to whatever
//! presentation code needs it.  Each call is a full load/mutate/store
//! round trip through the `RecordStore`.

use std::path::Path;

use tracing::debug;

use crate::crypto::derive_key;
use crate::errors::Result;

use super::entry::Entry;
use super::store::RecordStore;

/// The public face of an unlocked vault.
pub struct VaultManager {
    store: RecordStore,
}

impl VaultManager {
    /// Wrap an existing store.  Performs no I/O.
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Derive the key for `master_password` and prove it against the file.
    ///
    /// Does a smoke read of the whole vault, so a wrong password
    /// (`VaultError::Decryption`) or a damaged file
    /// (`VaultError::CorruptStore`) is reported here rather than on the
    /// first real operation.  A missing file unlocks as an empty vault.
    pub fn unlock(path: &Path, master_password: &str) -> Result<Self> {
        let manager = Self::new(RecordStore::new(path, derive_key(master_password)));
        let count = manager.list_entries()?.len();
        debug!(path = %path.display(), count, "vault unlocked");
        Ok(manager)
    }

    /// Add a new entry.  Duplicate sites are allowed.
    pub fn add_entry(&self, site: &str, username: &str, password: &str) -> Result<()> {
        let entry = Entry::new(site, username, password)?;
        self.store.append(&entry)
    }

    /// All entries, decrypted, in file order.
    pub fn list_entries(&self) -> Result<Vec<Entry>> {
        self.store.load()
    }

    /// Entries whose site contains `query` (case-sensitive), in file order.
    pub fn search(&self, query: &str) -> Result<Vec<Entry>> {
        let mut entries = self.store.load()?;
        entries.retain(|e| e.site.contains(query));
        Ok(entries)
    }

    /// The first entry whose site equals `site` exactly.
    pub fn find(&self, site: &str) -> Result<Option<Entry>> {
        Ok(self.store.load()?.into_iter().find(|e| e.site == site))
    }

    /// Delete every entry whose site equals `site` exactly.
    ///
    /// Returns the number removed; `0` is a normal outcome, not an error.
    pub fn delete_entry(&self, site: &str) -> Result<usize> {
        self.store.remove_by_site(site)
    }

    /// Append a batch of entries with a single file rewrite.
    pub fn import_entries(&self, new_entries: &[Entry]) -> Result<usize> {
        if new_entries.is_empty() {
            return Ok(0);
        }
        let mut entries = self.store.load()?;
        entries.extend_from_slice(new_entries);
        self.store.overwrite(&entries)?;
        Ok(new_entries.len())
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}
