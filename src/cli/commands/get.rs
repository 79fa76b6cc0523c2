//! `sitevault get` — print one field of the first entry for a site.

use crate::cli::{normalize_site, open_vault, Cli};
use crate::errors::{VaultError, Result};

/// Execute the `get` command.
pub fn execute(cli: &Cli, site: &str, username: bool) -> Result<()> {
    let site = normalize_site(site)?;
    let vault = open_vault(cli)?;

    let entry = vault
        .find(&site)?
        .ok_or_else(|| VaultError::CommandFailed(format!("no entry for site '{site}'")))?;

    if username {
        println!("{}", entry.username);
    } else {
        println!("{}", entry.password);
    }

    Ok(())
}
