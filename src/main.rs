use clap::Parser;
use syntaxvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref name,
            ref language,
            ref description,
        } => syntaxvault::cli::commands::add::execute(
            &cli,
            name,
            language.as_deref(),
            description.as_deref(),
        ),
        Commands::List => syntaxvault::cli::commands::list::execute(&cli),
        Commands::Get { ref name, no_copy } => {
            syntaxvault::cli::commands::get::execute(&cli, name, no_copy)
        }
        Commands::Delete { ref name, force } => {
            syntaxvault::cli::commands::delete::execute(&cli, name, force)
        }
        Commands::Search { ref query } => syntaxvault::cli::commands::search::execute(&cli, query),
        Commands::Edit {
            ref name,
            ref language,
            ref description,
            code_stdin,
        } => syntaxvault::cli::commands::edit::execute(
            &cli,
            name,
            language.as_deref(),
            description.as_deref(),
            code_stdin,
        ),
        Commands::Template { ref lang } => {
            syntaxvault::cli::commands::template::execute(&cli, lang)
        }
        Commands::Completions { shell } => syntaxvault::cli::commands::completions::execute(shell),
        Commands::Audit { last, ref since } => {
            syntaxvault::cli::commands::audit_cmd::execute(&cli, last, since.as_deref())
        }
    };

    if let Err(e) = result {
        syntaxvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
