use thiserror::Error;

/// All errors that can occur in SiteVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed — wrong master password or tampered vault")]
    Decryption,

    // --- Vault errors ---
    #[error("Vault file is corrupted: {0}")]
    CorruptStore(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- Input / CLI errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

impl VaultError {
    /// Process exit code for this error kind.
    ///
    /// Each domain failure gets its own code so scripts can tell a bad
    /// master password apart from a damaged file or a disk problem.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Decryption => 2,
            Self::CorruptStore(_) => 3,
            Self::Io(_) => 4,
            Self::Config(_) => 5,
            _ => 1,
        }
    }
}

/// Convenience type alias for SiteVault results.
pub type Result<T> = std::result::Result<T, VaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_have_distinct_exit_codes() {
        let codes = [
            VaultError::Decryption.exit_code(),
            VaultError::CorruptStore("x".into()).exit_code(),
            VaultError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")).exit_code(),
            VaultError::Config("x".into()).exit_code(),
            VaultError::CommandFailed("x".into()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
