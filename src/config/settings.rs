use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// User-level configuration, loaded from `~/.syntaxvault.toml`.
///
/// Every field has a sensible default so SyntaxVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Vault file name. Relative paths are resolved against the home
    /// directory.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Language offered by `add` when none is given.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Name prefix that marks a snippet as a language template.
    #[serde(default = "default_template_prefix")]
    pub template_prefix: String,

    /// Copy code to the clipboard on `get` and `template`.
    #[serde(default = "default_true")]
    pub copy_to_clipboard: bool,

    /// Show line numbers when printing code.
    #[serde(default = "default_true")]
    pub line_numbers: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    ".syntaxvault.json".to_string()
}

fn default_language() -> String {
    "text".to_string()
}

fn default_template_prefix() -> String {
    "template-".to_string()
}

fn default_true() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            default_language: default_language(),
            template_prefix: default_template_prefix(),
            copy_to_clipboard: default_true(),
            line_numbers: default_true(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the home directory.
    pub const FILE_NAME: &'static str = ".syntaxvault.toml";

    /// Load settings from `<home>/.syntaxvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(home: &Path) -> Result<Self> {
        let config_path = home.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            VaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the full path to the vault file.
    ///
    /// Example: `/home/user/.syntaxvault.json`
    pub fn vault_path(&self, home: &Path) -> PathBuf {
        let file = Path::new(&self.vault_file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            home.join(file)
        }
    }

    /// Snippet name that holds the template for `lang`.
    pub fn template_name(&self, lang: &str) -> String {
        format!("{}{}", self.template_prefix, lang.to_lowercase())
    }
}

/// The user's home directory, from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Result<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .ok_or(VaultError::HomeDirNotFound)
}

// ── Tests ────────────────────────────────────────────────────────────
