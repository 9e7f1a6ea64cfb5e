//! `sv get` — show a snippet and copy its code to the clipboard.

use crate::cli::{clipboard, output};
use crate::cli::{load_settings, open_store, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `get` command.
pub fn execute(cli: &Cli, name: &str, no_copy: bool) -> Result<()> {
    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    let snippet = store
        .get_snippet(name)
        .ok_or_else(|| VaultError::SnippetNotFound(name.to_string()))?;

    output::print_snippet(name, &snippet, settings.line_numbers);

    if settings.copy_to_clipboard && !no_copy && clipboard::copy_or_warn(&snippet.code) {
        output::success("Code copied to clipboard!");
    }

    Ok(())
}
