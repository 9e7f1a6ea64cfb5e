//! Operation log — SQLite-based record of vault changes.
//!
//! Every `add`, `edit`, and `delete` is recorded in a small SQLite
//! database next to the vault file (`.syntaxvault-audit.db`).  This is a
//! log of what was done, not a history of snippet contents.
//!
//! Designed for graceful degradation: if the database can't be opened or
//! written to, operations silently continue without logging.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use crate::errors::{Result, VaultError};

/// File name of the log database, placed beside the vault file.
const DB_FILE_NAME: &str = ".syntaxvault-audit.db";

/// A single operation log entry.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub snippet: Option<String>,
    pub details: Option<String>,
}

/// SQLite-backed operation log.
pub struct AuditLog {
    conn: Connection,
}

impl AuditLog {
    /// Open (or create) the log database in `vault_dir`.
    ///
    /// Returns `None` if the database can't be opened — callers should
    /// treat this as "logging unavailable" and continue normally.
    pub fn open(vault_dir: &Path) -> Option<Self> {
        let db_path = Self::db_path(vault_dir);
        let conn = Connection::open(&db_path).ok()?;

        // Snippets may hold credentials; keep the log owner-only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&db_path, perms);
        }

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS audit_log (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                operation TEXT NOT NULL,
                snippet   TEXT,
                details   TEXT
            );",
        )
        .ok()?;

        Some(Self { conn })
    }

    /// Record an operation. Fire-and-forget — errors are silently ignored.
    pub fn log(&self, operation: &str, snippet: Option<&str>, details: Option<&str>) {
        let now = Utc::now().to_rfc3339();
        let _ = self.conn.execute(
            "INSERT INTO audit_log (timestamp, operation, snippet, details)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![now, operation, snippet, details],
        );
    }

    /// Query recent entries, most recent first.
    ///
    /// - `limit`: maximum number of entries to return.
    /// - `since`: if provided, only return entries at or after this time.
    pub fn query(&self, limit: usize, since: Option<DateTime<Utc>>) -> Result<Vec<AuditEntry>> {
        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        // RFC 3339 strings from `Utc` sort chronologically, so a text
        // comparison is enough. The default (the epoch) means no lower bound.
        let since = since.unwrap_or_default().to_rfc3339();

        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, timestamp, operation, snippet, details
                 FROM audit_log
                 WHERE timestamp >= ?1
                 ORDER BY id DESC
                 LIMIT ?2",
            )
            .map_err(|e| VaultError::AuditError(format!("query prepare: {e}")))?;

        let rows = stmt
            .query_map(rusqlite::params![since, limit_i64], |row| {
                let ts_str: String = row.get(1)?;
                let timestamp = DateTime::parse_from_rfc3339(&ts_str)
                    .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

                Ok(AuditEntry {
                    id: row.get(0)?,
                    timestamp,
                    operation: row.get(2)?,
                    snippet: row.get(3)?,
                    details: row.get(4)?,
                })
            })
            .map_err(|e| VaultError::AuditError(format!("query exec: {e}")))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| VaultError::AuditError(format!("row parse: {e}")))
    }

    /// Path to the log database for a vault directory.
    pub fn db_path(vault_dir: &Path) -> PathBuf {
        vault_dir.join(DB_FILE_NAME)
    }
}

/// Convenience helper: log an operation for the vault in `vault_dir`.
///
/// Opens the database, logs the event, and silently ignores any errors.
/// This is safe to call from any command — it never fails the parent operation.
pub fn log_audit(vault_dir: &Path, op: &str, snippet: Option<&str>, details: Option<&str>) {
    if let Some(audit) = AuditLog::open(vault_dir) {
        audit.log(op, snippet, details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_creates_database() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path());
        assert!(audit.is_some(), "should open successfully");
        assert!(AuditLog::db_path(dir.path()).exists());
    }

    #[test]
    fn log_and_query_roundtrip() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path()).unwrap();

        audit.log("add", Some("fib"), Some("python"));
        audit.log("edit", Some("fib"), Some("description"));
        audit.log("delete", Some("fib"), None);

        let entries = audit.query(10, None).unwrap();
        assert_eq!(entries.len(), 3);

        // Most recent first.
        assert_eq!(entries[0].operation, "delete");
        assert_eq!(entries[1].operation, "edit");
        assert_eq!(entries[2].operation, "add");
        assert_eq!(entries[2].snippet.as_deref(), Some("fib"));
        assert_eq!(entries[2].details.as_deref(), Some("python"));
        assert!(entries[0].details.is_none());
    }

    #[test]
    fn query_with_limit() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path()).unwrap();

        for i in 0..10 {
            audit.log("add", Some(&format!("snippet-{i}")), None);
        }

        let entries = audit.query(3, None).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].snippet.as_deref(), Some("snippet-9"));
    }

    #[test]
    fn query_with_since_filter() {
        let dir = TempDir::new().unwrap();
        let audit = AuditLog::open(dir.path()).unwrap();

        audit.log("add", Some("x"), None);

        let past = Utc::now() - chrono::Duration::hours(1);
        assert_eq!(audit.query(10, Some(past)).unwrap().len(), 1);

        let future = Utc::now() + chrono::Duration::hours(1);
        assert!(audit.query(10, Some(future)).unwrap().is_empty());
    }

    #[test]
    fn log_audit_helper_writes_entry() {
        let dir = TempDir::new().unwrap();
        log_audit(dir.path(), "add", Some("hello"), None);

        let audit = AuditLog::open(dir.path()).unwrap();
        let entries = audit.query(10, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].snippet.as_deref(), Some("hello"));
    }

    #[test]
    fn open_returns_none_on_bad_path() {
        let result = AuditLog::open(Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(result.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn audit_db_has_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let _audit = AuditLog::open(dir.path()).unwrap();

        let perms = std::fs::metadata(AuditLog::db_path(dir.path()))
            .unwrap()
            .permissions();
        assert_eq!(perms.mode() & 0o777, 0o600);
    }
}
