//! `sitevault completions` — generate shell completion scripts.
//!
//! Usage:
//!   sitevault completions bash > ~/.local/share/bash-completion/completions/sitevault
//!   sitevault completions zsh
//!   sitevault completions fish

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::Result;

/// Execute the `completions` command.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_completions(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "sitevault", out);
}
