//! `sitevault export` — write decrypted entries as a JSON document.
//!
//! Output shape:
//!
//! ```json
//! { "exported_at": "2024-01-01T00:00:00Z", "entries": [ { "site": ..., ... } ] }
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{VaultError, Result};
use crate::vault::Entry;

/// Top-level export document, also accepted by `import`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub exported_at: DateTime<Utc>,
    pub entries: Vec<Entry>,
}

/// Execute the `export` command.
pub fn execute(cli: &Cli, output_path: Option<&str>) -> Result<()> {
    let vault = open_vault(cli)?;
    let entries = vault.list_entries()?;
    let count = entries.len();

    let content = format_as_json(entries)?;

    // Write to file or stdout.
    match output_path {
        Some(dest) => {
            let dest_path = Path::new(dest);

            // Safety: refuse to overwrite the vault itself with plaintext.
            if same_file(dest_path, vault.path()) {
                return Err(VaultError::CommandFailed(
                    "refusing to export over the vault file".into(),
                ));
            }

            fs::write(dest_path, &content).map_err(|e| {
                VaultError::CommandFailed(format!("failed to write export file: {e}"))
            })?;

            output::success(&format!("Exported {count} entries to {dest}"));
            output::warning("The export file contains plaintext passwords.");
        }
        None => {
            // Write to stdout (no success message, just raw output).
            println!("{content}");
        }
    }

    Ok(())
}

/// Serialize entries into the export document.
fn format_as_json(entries: Vec<Entry>) -> Result<String> {
    let doc = ExportDocument {
        exported_at: Utc::now(),
        entries,
    };
    serde_json::to_string_pretty(&doc)
        .map_err(|e| VaultError::Serialization(format!("JSON export: {e}")))
}

/// Compare two paths, resolving them when they exist.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
