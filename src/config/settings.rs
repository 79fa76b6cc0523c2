use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{VaultError, Result};

/// Project-level configuration, loaded from `.sitevault.toml`.
///
/// Every field has a sensible default so SiteVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file path, relative to the working directory.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Show passwords in clear in `list` and `search` tables.
    #[serde(default)]
    pub show_passwords: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "passwords.json".to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            show_passwords: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    pub const FILE_NAME: &'static str = ".sitevault.toml";

    /// Load settings from `<dir>/.sitevault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Resolve the vault file against `dir` (absolute paths pass through).
    pub fn vault_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.vault_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_file, "passwords.json");
        assert!(!s.show_passwords);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_file, "passwords.json");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_file = "secrets/vault.json"
show_passwords = true
"#;
        fs::write(tmp.path().join(".sitevault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_file, "secrets/vault.json");
        assert!(settings.show_passwords);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".sitevault.toml"), "show_passwords = true\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert!(settings.show_passwords);
        assert_eq!(settings.vault_file, "passwords.json");
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".sitevault.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(matches!(result, Err(VaultError::Config(_))));
    }

    #[test]
    fn vault_path_is_relative_to_dir() {
        let s = Settings::default();
        let path = s.vault_path(Path::new("/home/user"));
        assert_eq!(path, PathBuf::from("/home/user/passwords.json"));
    }
}
