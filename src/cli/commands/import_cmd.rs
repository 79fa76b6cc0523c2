//! `sitevault import` — append entries from a JSON file.
//!
//! Accepts either an `export` document or a bare JSON array of
//! `{ "site", "username", "password" }` objects.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cli::commands::export::ExportDocument;
use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::{VaultError, Result};
use crate::vault::Entry;

/// Either shape the importer understands.
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFile {
    Document(ExportDocument),
    Bare(Vec<Entry>),
}

/// Execute the `import` command.
pub fn execute(cli: &Cli, file_path: &str) -> Result<()> {
    let source = Path::new(file_path);

    if !source.exists() {
        return Err(VaultError::CommandFailed(format!(
            "import file not found: {}",
            source.display()
        )));
    }

    let entries = parse_json_file(source)?;
    if entries.is_empty() {
        output::warning("No entries found in the import file.");
        return Ok(());
    }

    let vault = open_vault(cli)?;
    let count = vault.import_entries(&entries)?;

    output::success(&format!(
        "Imported {count} entries from {} into {}",
        source.display(),
        vault.path().display()
    ));

    Ok(())
}

/// Parse and validate an import file.
fn parse_json_file(path: &Path) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path)?;
    parse_json(&content)
}

fn parse_json(content: &str) -> Result<Vec<Entry>> {
    let parsed: ImportFile = serde_json::from_str(content)
        .map_err(|e| VaultError::InvalidInput(format!("import file is not valid JSON: {e}")))?;

    let raw = match parsed {
        ImportFile::Document(doc) => doc.entries,
        ImportFile::Bare(entries) => entries,
    };

    // Re-validate through the constructor so blank sites never get in.
    raw.into_iter()
        .map(|e| Entry::new(e.site, e.username, e.password))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array() {
        let json = r#"[{"site": "a.com", "username": "u", "password": "p"}]"#;
        let entries = parse_json(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].site, "a.com");
    }

    #[test]
    fn parses_export_document() {
        let json = r#"{
            "exported_at": "2024-05-01T12:00:00Z",
            "entries": [
                {"site": "a.com", "username": "u", "password": "p"},
                {"site": "b.com", "username": "v", "password": "q"}
            ]
        }"#;
        let entries = parse_json(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].site, "b.com");
    }

    #[test]
    fn rejects_blank_site() {
        let json = r#"[{"site": " ", "username": "u", "password": "p"}]"#;
        assert!(parse_json(json).is_err());
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"[{"site": "a.com", "username": "u"}]"#;
        assert!(parse_json(json).is_err());
    }
}
