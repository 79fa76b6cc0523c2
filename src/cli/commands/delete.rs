//! `sitevault delete` — remove every entry for a site.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{normalize_site, open_vault, Cli};
use crate::errors::{VaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, site: &str, force: bool) -> Result<()> {
    let site = normalize_site(site)?;

    // Unlock before confirming so a bad password fails fast.
    let vault = open_vault(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all entries for '{site}'?"))
            .default(false)
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    match vault.delete_entry(&site)? {
        0 => output::info(&format!("No entry for '{site}', nothing deleted.")),
        n => output::success(&format!(
            "Deleted {} for '{site}'",
            output::count_noun(n, "entry", "entries")
        )),
    }

    Ok(())
}
