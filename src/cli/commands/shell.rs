//! `sitevault shell` — interactive menu over an unlocked vault.
//!
//! The vault is unlocked once, then the same `VaultManager` serves every
//! menu action until the user exits.

use dialoguer::{Confirm, Input, Password, Select};

use crate::cli::output;
use crate::cli::{effective_settings, normalize_site, open_vault, Cli};
use crate::errors::{VaultError, Result};
use crate::vault::VaultManager;

/// Menu labels, in display order.
const MENU: [&str; 5] = [
    "List entries",
    "Add entry",
    "Search entries",
    "Delete entry",
    "Exit",
];

/// Execute the `shell` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = effective_settings(cli)?;
    let vault = open_vault(cli)?;
    output::success(&format!("Vault unlocked: {}", vault.path().display()));

    loop {
        let choice = Select::new()
            .with_prompt("Choose an option")
            .items(&MENU)
            .default(0)
            .interact_opt()
            .map_err(prompt_err)?;

        let result = match choice {
            Some(0) => list(&vault, settings.show_passwords),
            Some(1) => add(&vault),
            Some(2) => search(&vault, settings.show_passwords),
            Some(3) => delete(&vault),
            _ => break,
        };

        // Input mistakes keep the session alive; anything from the vault
        // itself (key, file, disk) ends it.
        match result {
            Ok(()) => {}
            Err(e @ (VaultError::InvalidInput(_) | VaultError::UserCancelled)) => {
                output::warning(&e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    output::info("Goodbye!");
    Ok(())
}

fn list(vault: &VaultManager, show_passwords: bool) -> Result<()> {
    let entries = vault.list_entries()?;
    output::print_entries_table(&entries, show_passwords);
    Ok(())
}

fn add(vault: &VaultManager) -> Result<()> {
    let site: String = Input::new()
        .with_prompt("Site")
        .interact_text()
        .map_err(prompt_err)?;
    let site = normalize_site(&site)?;

    let username: String = Input::new()
        .with_prompt("Username")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;

    let password = Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(prompt_err)?;

    vault.add_entry(&site, username.trim(), &password)?;
    output::success("Entry added.");
    Ok(())
}

fn search(vault: &VaultManager, show_passwords: bool) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Search sites for")
        .interact_text()
        .map_err(prompt_err)?;

    let matches = vault.search(&query)?;
    if matches.is_empty() {
        output::info(&format!("No entries match '{query}'."));
    } else {
        output::print_entries_table(&matches, show_passwords);
    }
    Ok(())
}

fn delete(vault: &VaultManager) -> Result<()> {
    let site: String = Input::new()
        .with_prompt("Site to delete")
        .interact_text()
        .map_err(prompt_err)?;
    let site = normalize_site(&site)?;

    let confirmed = Confirm::new()
        .with_prompt(format!("Delete all entries for '{site}'?"))
        .default(false)
        .interact()
        .map_err(prompt_err)?;
    if !confirmed {
        return Err(VaultError::UserCancelled);
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

fn prompt_err(e: dialoguer::Error) -> VaultError {
    VaultError::CommandFailed(format!("input prompt: {e}"))
}
