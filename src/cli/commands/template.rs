//! `sv template` — copy a language template to the clipboard.
//!
//! Templates are ordinary snippets named `<prefix><lang>` (default
//! prefix `template-`), e.g. `template-cpp`.

use console::style;

use crate::cli::{clipboard, output};
use crate::cli::{load_settings, open_store, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `template` command.
pub fn execute(cli: &Cli, lang: &str) -> Result<()> {
    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    let template_name = settings.template_name(lang);
    let Some(snippet) = store.get_snippet(&template_name) else {
        output::tip(&format!(
            "Hint: Run `sv add {template_name}` to create one first."
        ));
        return Err(VaultError::CommandFailed(format!(
            "no template found for '{lang}'"
        )));
    };

    if !settings.copy_to_clipboard {
        println!("{}", snippet.code);
    } else if clipboard::copy_or_warn(&snippet.code) {
        output::success(&format!(
            "{} template copied to clipboard!",
            lang.to_uppercase()
        ));
    }

    if !snippet.description.is_empty() {
        println!("{}", style(format!("Description: {}", snippet.description)).dim());
    }

    Ok(())
}
