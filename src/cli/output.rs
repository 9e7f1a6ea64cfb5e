//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::{Document, Snippet};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a bold cyan instruction to stderr (keeps stdout clean for pipes).
pub fn prompt(msg: &str) {
    eprintln!("{}", style(msg).cyan().bold());
}

/// Print a table of snippets (Name, Language, Description, Updated).
pub fn print_snippets_table(title: &str, snippets: &Document) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Language", "Description", "Updated"]);

    for (name, s) in snippets {
        table.add_row(vec![
            style(name).cyan().to_string(),
            style(&s.language).green().to_string(),
            s.description.clone(),
            s.timestamp.clone(),
        ]);
    }

    println!("{}", style(title).magenta().bold());
    println!("{table}");
}

/// Print a snippet's code in a bordered panel, titled with its name and
/// language, with the description underneath.
pub fn print_snippet(name: &str, snippet: &Snippet, line_numbers: bool) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![format!("Snippet: {name} ({})", snippet.language)]);
    table.add_row(vec![render_code(&snippet.code, line_numbers)]);

    println!("{table}");
    if !snippet.description.is_empty() {
        println!("{}", style(&snippet.description).dim());
    }
}

/// Prefix each line with a right-aligned, dimmed line number.
pub fn render_code(code: &str, line_numbers: bool) -> String {
    if !line_numbers {
        return code.to_string();
    }

    let count = code.lines().count().max(1);
    let width = count.to_string().len();

    code.lines()
        .enumerate()
        .map(|(i, line)| {
            let num = format!("{:>width$}", i + 1);
            format!("{} {line}", style(num).dim())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
