//! Vault file format and atomic persistence.
//!
//! A vault file is a JSON array of `EncryptedRecord` objects,
//! pretty-printed with a 4-space indent:
//!
//! ```text
//! [
//!     {
//!         "site": "<token>",
//!         "username": "<token>",
//!         "password": "<token>"
//!     }
//! ]
//! ```
//!
//! A missing file means an empty vault.  There is no version marker.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::warn;

use super::entry::EncryptedRecord;
use crate::errors::{VaultError, Result};

/// Read and parse every record in the vault file.
///
/// Returns an empty list when the file does not exist.  Any other read
/// failure is passed through as `VaultError::Io`; a file that is not a
/// JSON array of three-field records is `VaultError::CorruptStore`.
pub fn read_records(path: &Path) -> Result<Vec<EncryptedRecord>> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_slice(&data).map_err(|e| {
        warn!(path = %path.display(), "vault file failed to parse");
        VaultError::CorruptStore(format!("{}: {e}", path.display()))
    })
}

/// Serialize records to the on-disk JSON layout.
pub fn encode_records(records: &[EncryptedRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|e| VaultError::Serialization(format!("records: {e}")))?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write records to disk **atomically**.
///
/// 1. Serialize the records to JSON.
/// 2. Write to a temp file in the same directory.
/// 3. Rename the temp file over the target path.
///
/// Readers see either the old file or the new one, never a truncated mix.
pub fn write_records(path: &Path, records: &[EncryptedRecord]) -> Result<()> {
    let buf = encode_records(records)?;

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(parent, path);
    let written = write_private(&tmp_path, &buf)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(VaultError::from));
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }

    written
}

/// `.<file name>.tmp` next to the target.
fn temp_path(parent: &Path, path: &Path) -> PathBuf {
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

/// Write `buf` to `path`, owner-only on Unix.
fn write_private(path: &Path, buf: &[u8]) -> Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        // `mode` only applies on creation; a leftover temp file keeps its own.
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(buf)?;
        file.sync_all()?;
    }

    #[cfg(not(unix))]
    fs::write(path, buf)?;

    Ok(())
}
