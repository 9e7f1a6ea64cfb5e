//! `sv add` — store a new snippet.

use crate::cli::output;
use crate::cli::{is_interactive, load_settings, log_audit, open_store, prompt_text, read_code, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    name: &str,
    language: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    // Refuse to overwrite a vault we could not parse.
    store.try_load()?;

    if store.contains(name) {
        return Err(VaultError::SnippetAlreadyExists(name.to_string()));
    }

    let code = read_code("Enter/Paste your code")?;
    if code.trim().is_empty() {
        return Err(VaultError::EmptyCode);
    }

    // Flags win; otherwise ask, or fall back to defaults when piped.
    let interactive = is_interactive();
    let language = match language {
        Some(l) => l.to_string(),
        None if interactive => prompt_text(
            "Language (e.g., python, bash, sql)",
            Some(&settings.default_language),
        )?,
        None => settings.default_language.clone(),
    };
    let description = match description {
        Some(d) => d.to_string(),
        None if interactive => prompt_text("Description", None)?,
        None => String::new(),
    };

    store.add_snippet(name, &code, &language, &description)?;

    log_audit(&store, "add", Some(name), Some(&language.to_lowercase()));
    output::success(&format!("Snippet '{name}' added."));

    Ok(())
}
