//! `sv list` — display all snippets in a table.

use crate::cli::output;
use crate::cli::{load_settings, open_store, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    let vault = store.load();

    if vault.is_empty() {
        output::info("The vault is empty.");
        output::tip("Run `sv add <NAME>` to get started.");
        return Ok(());
    }

    output::print_snippets_table(
        &format!("SyntaxVault Snippets ({})", vault.len()),
        &vault,
    );

    Ok(())
}
