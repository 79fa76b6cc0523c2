//! Cryptographic primitives for SiteVault.
//!
//! This module provides:
//! - SHA-256 master-password key derivation and the `Key` type (`kdf`)
//! - AES-256-GCM per-field token encryption and decryption (`cipher`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, Key};
pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_key, Key, KEY_LEN};
