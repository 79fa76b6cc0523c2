//! `sitevault add` — store a new site/username/password entry.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{normalize_site, open_vault, Cli};
use crate::errors::{VaultError, Result};

/// Execute the `add` command.
pub fn execute(cli: &Cli, site: &str, username: Option<&str>) -> Result<()> {
    let site = normalize_site(site)?;

    // Unlock first so a wrong password is reported before we ask for more.
    let vault = open_vault(cli)?;

    let username = match username {
        Some(u) => u.trim().to_string(),
        None => dialoguer::Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| VaultError::CommandFailed(format!("input prompt: {e}")))?
            .trim()
            .to_string(),
    };

    let password = if io::stdin().is_terminal() {
        dialoguer::Password::new()
            .with_prompt(format!("Password for {site}"))
            .interact()
            .map_err(|e| VaultError::CommandFailed(format!("input prompt: {e}")))?
    } else {
        // Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end_matches(['\r', '\n']).to_string()
    };

    vault.add_entry(&site, &username, &password)?;

    output::success(&format!("Entry for '{site}' added."));
    Ok(())
}
