//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod clipboard;
pub mod commands;
pub mod output;

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{home_dir, Settings};
use crate::errors::{Result, VaultError};
use crate::vault::VaultStore;

/// SyntaxVault CLI: a vault for your favorite code snippets.
#[derive(Parser)]
#[command(
    name = "sv",
    about = "SyntaxVault: a CLI for your favorite code snippets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file to use (default: ~/.syntaxvault.json)
    #[arg(long, env = "SYNTAXVAULT_PATH", global = true)]
    pub vault: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a new snippet (code is read from stdin until EOF)
    Add {
        /// Snippet name
        name: String,
        /// Language (e.g. python, bash, sql); prompted if omitted
        #[arg(short, long)]
        language: Option<String>,
        /// Description; prompted if omitted
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all saved snippets
    List,

    /// Show a snippet and copy it to the clipboard
    Get {
        /// Snippet name
        name: String,
        /// Do not copy the code to the clipboard
        #[arg(long)]
        no_copy: bool,
    },

    /// Delete a snippet
    Delete {
        /// Snippet name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Find snippets by name or description
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// Edit an existing snippet's details
    Edit {
        /// Snippet name
        name: String,
        /// New language
        #[arg(short, long)]
        language: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Read new code from stdin
        #[arg(long)]
        code_stdin: bool,
    },

    /// Copy a language template to the clipboard
    Template {
        /// Template language
        #[arg(default_value = "cpp")]
        lang: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// View the log of vault changes
    Audit {
        /// Number of entries to show (default: 50)
        #[arg(long, default_value = "50")]
        last: usize,
        /// Show entries since a duration ago (e.g. 7d, 24h, 30m)
        #[arg(long)]
        since: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load user settings from the home directory.
///
/// Without a home directory there is no config file to read, so the
/// defaults are used.
pub fn load_settings() -> Result<Settings> {
    match home_dir() {
        Ok(home) => Settings::load(&home),
        Err(_) => Ok(Settings::default()),
    }
}

/// Resolve the vault file path, trying in order:
/// 1. `--vault` flag or `SYNTAXVAULT_PATH`
/// 2. `vault_file` from settings, relative to the home directory
pub fn vault_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    match &cli.vault {
        Some(path) => Ok(path.clone()),
        None => Ok(settings.vault_path(&home_dir()?)),
    }
}

/// Open the vault, creating an empty one on first use.
///
/// Warns (but carries on with an empty vault) if the file can't be parsed.
pub fn open_store(cli: &Cli, settings: &Settings) -> Result<VaultStore> {
    let store = VaultStore::open(vault_path(cli, settings)?)?;

    if let Err(VaultError::CorruptStore { path, reason }) = store.try_load() {
        output::warning(&format!(
            "Vault at {} could not be read ({reason}); showing it as empty.",
            path.display()
        ));
    }

    Ok(store)
}

/// Read a block of code from stdin until EOF.
///
/// When stdin is a terminal, tells the user how to finish input first.
/// A single trailing newline is dropped.
pub fn read_code(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        output::prompt(&format!(
            "{prompt} (press Ctrl-D, or Ctrl-Z then Enter on Windows, to save):"
        ));
    }

    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;

    let code = buf
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(buf.as_str());
    Ok(code.to_string())
}

/// Returns `true` if we can ask the user questions.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Prompt for a line of text, offering `default` when given.
pub fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    input
        .interact_text()
        .map_err(|e| VaultError::CommandFailed(format!("input prompt: {e}")))
}

/// Ask a yes/no question.
pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("confirm prompt: {e}")))
}

/// Record a vault change in the operation log, if enabled.
///
/// Never fails the calling command.
pub fn log_audit(store: &VaultStore, op: &str, name: Option<&str>, details: Option<&str>) {
    #[cfg(feature = "audit-log")]
    crate::audit::log_audit(store.dir(), op, name, details);

    // Suppress unused variable warnings when the audit log is compiled out.
    #[cfg(not(feature = "audit-log"))]
    let _ = (store, op, name, details);
}
