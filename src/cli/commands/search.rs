//! `sv search` — filter snippets by name or description.

use crate::cli::output;
use crate::cli::{load_settings, open_store, Cli};
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    let results = store.search_snippets(query);

    if results.is_empty() {
        output::info(&format!("No snippets found matching '{query}'."));
        return Ok(());
    }

    output::print_snippets_table(&format!("Search Results: {query}"), &results);

    Ok(())
}
