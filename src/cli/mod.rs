//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{VaultError, Result};
use crate::vault::VaultManager;

/// Environment variable that supplies the master password non-interactively.
pub const PASSWORD_ENV: &str = "SITEVAULT_PASSWORD";

/// SiteVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "sitevault", about = "Local encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: passwords.json, or `vault_file` in .sitevault.toml)
    #[arg(long, global = true)]
    pub vault: Option<String>,

    /// Show passwords in clear in tables
    #[arg(long, global = true)]
    pub show_passwords: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add an entry (password is always prompted or piped)
    Add {
        /// Site or service name (e.g. gmail.com)
        site: String,
        /// Account username (omit for interactive prompt)
        username: Option<String>,
    },

    /// List all entries
    List,

    /// Find entries whose site contains the query (case-sensitive)
    Search {
        /// Substring to look for in site names
        query: String,
    },

    /// Print the password of the first entry for a site
    Get {
        /// Exact site name
        site: String,
        /// Print the username instead of the password
        #[arg(short, long)]
        username: bool,
    },

    /// Delete every entry for a site
    Delete {
        /// Exact site name
        site: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Export decrypted entries as JSON
    Export {
        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import entries from a JSON export
    Import {
        /// Path to the JSON file to import
        file: String,
    },

    /// Interactive menu (list, add, search, delete)
    Shell,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Settings from `.sitevault.toml` in the working directory, with CLI
/// flags applied on top.
pub fn effective_settings(cli: &Cli) -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;
    if let Some(ref vault) = cli.vault {
        settings.vault_file.clone_from(vault);
    }
    if cli.show_passwords {
        settings.show_passwords = true;
    }
    Ok(settings)
}

/// Full path to the vault file.
pub fn vault_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(effective_settings(cli)?.vault_path(&cwd))
}

/// Get the master password, trying in order:
/// 1. `SITEVAULT_PASSWORD` env var (scripts, CI)
/// 2. Interactive masked prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for the master password and unlock the vault.
///
/// The unlock includes a smoke read, so a wrong password or a damaged
/// vault file fails here before any command runs.
pub fn open_vault(cli: &Cli) -> Result<VaultManager> {
    let path = vault_path(cli)?;
    let password = prompt_password()?;
    VaultManager::unlock(&path, &password)
}

/// Trim a site name and reject it if nothing is left.
pub fn normalize_site(site: &str) -> Result<String> {
    let site = site.trim();
    if site.is_empty() {
        return Err(VaultError::InvalidInput("site cannot be empty".into()));
    }
    Ok(site.to_string())
}
