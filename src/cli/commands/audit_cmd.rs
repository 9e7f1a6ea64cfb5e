//! `sv audit` — display the log of vault changes.
//!
//! Usage:
//!   sv audit               # show last 50 entries
//!   sv audit --last 20     # show last 20
//!   sv audit --since 7d    # entries from last 7 days

use chrono::{DateTime, Duration, Utc};

use crate::cli::Cli;
use crate::errors::{Result, VaultError};

/// Execute the `audit` command.
#[cfg(feature = "audit-log")]
pub fn execute(cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    use crate::audit::AuditLog;
    use crate::cli::{load_settings, open_store, output};

    let settings = load_settings()?;
    let store = open_store(cli, &settings)?;

    let audit = AuditLog::open(store.dir())
        .ok_or_else(|| VaultError::AuditError("failed to open audit database".into()))?;

    let since_dt = since.map(parse_since).transpose()?;
    let entries = audit.query(last, since_dt)?;

    if entries.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&entries);

    Ok(())
}

/// Without the `audit-log` feature there is nothing to show.
#[cfg(not(feature = "audit-log"))]
pub fn execute(_cli: &Cli, _last: usize, since: Option<&str>) -> Result<()> {
    since.map(parse_since).transpose()?;
    Err(VaultError::AuditError(
        "this build of sv was compiled without the `audit-log` feature".into(),
    ))
}

/// Turn a human-friendly duration like "7d", "24h", or "30m" into the
/// point in time that far back from now.
fn parse_since(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let invalid = || {
        VaultError::CommandFailed(format!(
            "invalid duration '{input}' — use format like 7d, 24h, or 30m"
        ))
    };

    let split = input.len().checked_sub(1).ok_or_else(invalid)?;
    if !input.is_char_boundary(split) {
        return Err(invalid());
    }
    let (num_str, unit) = input.split_at(split);
    let num: i64 = num_str.parse().map_err(|_| invalid())?;

    let duration = match unit {
        "d" => Duration::try_days(num),
        "h" => Duration::try_hours(num),
        "m" => Duration::try_minutes(num),
        _ => None,
    }
    .ok_or_else(invalid)?;

    Utc::now().checked_sub_signed(duration).ok_or_else(invalid)
}

/// Print log entries in a formatted table.
#[cfg(feature = "audit-log")]
fn print_audit_table(entries: &[crate::audit::AuditEntry]) {
    use comfy_table::{ContentArrangement, Table};
    use console::style;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Snippet", "Details"]);

    for entry in entries {
        let time = entry
            .timestamp
            .with_timezone(&chrono::Local)
            .format(crate::vault::TIMESTAMP_FORMAT)
            .to_string();

        table.add_row(vec![
            time,
            colorize_operation(&entry.operation),
            entry.snippet.as_deref().unwrap_or("-").to_string(),
            entry.details.as_deref().unwrap_or("-").to_string(),
        ]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", entries.len())).bold()
    );
    println!("{table}");
}

/// Colorize operation names for display.
#[cfg(feature = "audit-log")]
fn colorize_operation(op: &str) -> String {
    use console::style;

    match op {
        "add" => style(op).green().to_string(),
        "edit" => style(op).blue().to_string(),
        "delete" => style(op).red().to_string(),
        _ => op.to_string(),
    }
}
