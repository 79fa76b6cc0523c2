//! `sitevault search` — list entries whose site contains a substring.

use crate::cli::output;
use crate::cli::{effective_settings, open_vault, Cli};
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let settings = effective_settings(cli)?;
    let vault = open_vault(cli)?;

    let matches = vault.search(query)?;
    if matches.is_empty() {
        output::info(&format!("No entries match '{query}'."));
        return Ok(());
    }

    output::info(&format!(
        "{} for '{query}'",
        output::count_noun(matches.len(), "match", "matches")
    ));
    output::print_entries_table(&matches, settings.show_passwords);

    Ok(())
}
