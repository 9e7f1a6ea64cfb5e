use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in SyntaxVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Snippet errors ---
    #[error("Snippet '{0}' not found")]
    SnippetNotFound(String),

    #[error("Snippet '{0}' already exists (use `edit` to change it)")]
    SnippetAlreadyExists(String),

    #[error("Code cannot be empty")]
    EmptyCode,

    // --- Store errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault at {path} is not a valid snippet document: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Could not determine home directory — set HOME or pass --vault")]
    HomeDirNotFound,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    // --- Operation log errors ---
    #[error("Audit error: {0}")]
    AuditError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for SyntaxVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
