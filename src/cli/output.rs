//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::Entry;

/// What a hidden password looks like in tables.
const MASK: &str = "••••••••";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a dim hint on stderr, for follow-ups to an error.
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// "1 entry", "3 entries".
pub fn count_noun(n: usize, one: &str, many: &str) -> String {
    format!("{n} {}", if n == 1 { one } else { many })
}

/// Print a table of entries (Site, Username, Password).
pub fn print_entries_table(entries: &[Entry], show_passwords: bool) {
    if entries.is_empty() {
        info("No entries stored yet.");
        tip("Run `sitevault add <SITE>` to add your first entry.");
        return;
    }

    println!("{}", entries_table(entries, show_passwords));
}

/// Build the entries table without printing it.
pub fn entries_table(entries: &[Entry], show_passwords: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Username", "Password"]);

    for e in entries {
        let password = if show_passwords {
            e.password.clone()
        } else {
            MASK.to_string()
        };
        table.add_row(vec![e.site.clone(), e.username.clone(), password]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![Entry::new("gmail.com", "user123", "mypassword").unwrap()]
    }

    #[test]
    fn count_noun_picks_singular_and_plural() {
        assert_eq!(count_noun(1, "entry", "entries"), "1 entry");
        assert_eq!(count_noun(0, "entry", "entries"), "0 entries");
        assert_eq!(count_noun(2, "match", "matches"), "2 matches");
    }

    #[test]
    fn masked_table_hides_password() {
        let rendered = entries_table(&sample(), false).to_string();
        assert!(rendered.contains("gmail.com"));
        assert!(rendered.contains("user123"));
        assert!(!rendered.contains("mypassword"));
    }

    #[test]
    fn clear_table_shows_password() {
        let rendered = entries_table(&sample(), true).to_string();
        assert!(rendered.contains("mypassword"));
    }
}
