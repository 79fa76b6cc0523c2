use clap::Parser;
use sitevault::cli::{Cli, Commands};
use sitevault::errors::VaultError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout stays clean for `get` and `export`.
    let default_filter = if cli.verbose {
        "sitevault=debug"
    } else {
        "sitevault=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Add {
            ref site,
            ref username,
        } => sitevault::cli::commands::add::execute(&cli, site, username.as_deref()),
        Commands::List => sitevault::cli::commands::list::execute(&cli),
        Commands::Search { ref query } => sitevault::cli::commands::search::execute(&cli, query),
        Commands::Get { ref site, username } => {
            sitevault::cli::commands::get::execute(&cli, site, username)
        }
        Commands::Delete { ref site, force } => {
            sitevault::cli::commands::delete::execute(&cli, site, force)
        }
        Commands::Export { ref output } => {
            sitevault::cli::commands::export::execute(&cli, output.as_deref())
        }
        Commands::Import { ref file } => sitevault::cli::commands::import_cmd::execute(&cli, file),
        Commands::Shell => sitevault::cli::commands::shell::execute(&cli),
        Commands::Completions { shell } => sitevault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        sitevault::cli::output::error(&e.to_string());
        match e {
            VaultError::Decryption => {
                sitevault::cli::output::hint("Check the master password and try again.");
            }
            VaultError::CorruptStore(_) => {
                sitevault::cli::output::hint("Restore the vault file from a backup.");
            }
            _ => {}
        }
        std::process::exit(e.exit_code());
    }
}
