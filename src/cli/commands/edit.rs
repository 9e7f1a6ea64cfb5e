//! `sv edit` — change an existing snippet's code, language, or description.
//!
//! With any of `--language`, `--description`, or `--code-stdin` the edit is
//! applied without prompting.  Otherwise each field is prompted for with its
//! current value as the default.

use crate::cli::output;
use crate::cli::{
    confirm, is_interactive, load_settings, log_audit, open_store, prompt_text, read_code, Cli,
};
use crate::errors::{Result, VaultError};
use crate::vault::{Snippet, SnippetUpdate};

/// Execute the `edit` command.
pub fn execute(
    cli: &Cli,
    name: &str,
    language: Option<&str>,
    description: Option<&str>,
    code_stdin: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    let current = store
        .get_snippet(name)
        .ok_or_else(|| VaultError::SnippetNotFound(name.to_string()))?;

    let update = if language.is_some() || description.is_some() || code_stdin {
        let mut update = SnippetUpdate {
            language: language.map(str::to_string),
            description: description.map(str::to_string),
            code: None,
        };
        if code_stdin {
            update.code = read_new_code()?;
        }
        update
    } else if is_interactive() {
        prompt_update(name, &current)?
    } else {
        return Err(VaultError::CommandFailed(
            "no terminal to prompt on; pass --language, --description, or --code-stdin".into(),
        ));
    };

    if !store.update_snippet(name, update.clone())? {
        return Err(VaultError::SnippetNotFound(name.to_string()));
    }

    log_audit(&store, "edit", Some(name), Some(&describe_changes(&update)));
    output::success(&format!("Snippet '{name}' has been updated."));

    Ok(())
}

/// Walk the user through each field, keeping current values by default.
fn prompt_update(name: &str, current: &Snippet) -> Result<SnippetUpdate> {
    output::info(&format!("Editing snippet: {name}"));
    output::tip("Press Enter to keep the current value.");

    let description = prompt_text("New Description", Some(&current.description))?;
    let language = prompt_text("New Language", Some(&current.language))?;

    let code = if confirm("Do you want to update the code content?", false)? {
        read_new_code()?
    } else {
        None
    };

    Ok(prompted_update(current, description, language, code))
}

/// Turn the answers to the edit prompts into an update.  Answers equal
/// to the current value are left out.
fn prompted_update(
    current: &Snippet,
    description: String,
    language: String,
    code: Option<String>,
) -> SnippetUpdate {
    SnippetUpdate {
        code,
        language: changed(&current.language, language),
        description: changed(&current.description, description),
    }
}

/// Read replacement code; blank input keeps the original.
fn read_new_code() -> Result<Option<String>> {
    let code = read_code("Enter/Paste your NEW code")?;
    if code.trim().is_empty() {
        output::warning("Code was empty. Keeping original code.");
        return Ok(None);
    }
    Ok(Some(code))
}

/// `Some(new)` only if it differs from `old`.
fn changed(old: &str, new: String) -> Option<String> {
    (old != new).then_some(new)
}

/// Short summary of which fields an update touches, for the operation log.
fn describe_changes(update: &SnippetUpdate) -> String {
    let fields: Vec<&str> = [
        update.code.as_ref().map(|_| "code"),
        update.language.as_ref().map(|_| "language"),
        update.description.as_ref().map(|_| "description"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if fields.is_empty() {
        "timestamp only".to_string()
    } else {
        fields.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_keeps_identical_values_out() {
        assert_eq!(changed("python", "python".into()), None);
        assert_eq!(changed("python", "rust".into()), Some("rust".into()));
        assert_eq!(changed("desc", String::new()), Some(String::new()));
    }

    #[test]
    fn prompted_update_keeps_accepted_defaults_out() {
        let current = Snippet::new("print(1)", "python", "hello");

        let update = prompted_update(&current, "hello".into(), "python".into(), None);
        assert_eq!(update, SnippetUpdate::default());
        assert_eq!(describe_changes(&update), "timestamp only");
    }

    #[test]
    fn prompted_update_carries_changed_answers() {
        let current = Snippet::new("print(1)", "python", "hello");

        let update = prompted_update(
            &current,
            String::new(),
            "Ruby".into(),
            Some("puts 1".into()),
        );
        assert_eq!(
            update,
            SnippetUpdate::default()
                .code("puts 1")
                .language("Ruby")
                .description("")
        );

        let mut edited = current.clone();
        edited.apply(update);
        assert_eq!(edited.code, "puts 1");
        assert_eq!(edited.language, "ruby");
        assert_eq!(edited.description, "");
    }

    #[test]
    fn describe_changes_lists_fields() {
        let update = SnippetUpdate::default().code("x").description("d");
        assert_eq!(describe_changes(&update), "code, description");
        assert_eq!(
            describe_changes(&SnippetUpdate::default()),
            "timestamp only"
        );
    }
}
