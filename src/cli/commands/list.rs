//! `sitevault list` — display all entries in a table.

use crate::cli::output;
use crate::cli::{effective_settings, open_vault, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = effective_settings(cli)?;
    let vault = open_vault(cli)?;

    let entries = vault.list_entries()?;

    output::info(&format!(
        "{} in {}",
        output::count_noun(entries.len(), "entry", "entries"),
        vault.path().display()
    ));
    output::print_entries_table(&entries, settings.show_passwords);

    Ok(())
}
