//! Vault module — encrypted record storage.
//!
//! This module provides:
//! - `Entry` and `EncryptedRecord` types (`entry`)
//! - JSON vault file format with atomic writes (`format`)
//! - `RecordStore` for loading and rewriting the vault file (`store`)
//! - `VaultManager`, the add/list/search/delete facade (`manager`)

pub mod entry;
pub mod format;
pub mod manager;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{EncryptedRecord, Entry};
pub use manager::VaultManager;
pub use store::RecordStore;
