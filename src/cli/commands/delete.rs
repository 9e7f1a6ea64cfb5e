//! `sv delete` — remove a snippet from the vault.

use crate::cli::output;
use crate::cli::{confirm, is_interactive, load_settings, log_audit, open_store, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    if !store.contains(name) {
        return Err(VaultError::SnippetNotFound(name.to_string()));
    }

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        if !is_interactive() {
            return Err(VaultError::CommandFailed(format!(
                "cannot confirm deleting '{name}' without a terminal; pass --force"
            )));
        }
        if !confirm(&format!("Are you sure you want to delete '{name}'?"), false)? {
            output::info("Deletion cancelled.");
            return Ok(());
        }
    }

    if !store.delete_snippet(name)? {
        return Err(VaultError::SnippetNotFound(name.to_string()));
    }

    log_audit(&store, "delete", Some(name), None);
    output::success(&format!("Snippet '{name}' deleted."));

    Ok(())
}
