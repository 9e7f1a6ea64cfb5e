//! On-disk representation of the snippet document.
//!
//! The vault file is a single JSON object:
//!
//! ```text
//! {
//!     "<name>": {
//!         "code": "...",
//!         "language": "...",
//!         "description": "...",
//!         "timestamp": "YYYY-MM-DD HH:MM:SS"
//!     }
//! }
//! ```
//!
//! There is no header, version field, or checksum. Keys keep the order
//! they were inserted in so the file diffs cleanly.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::snippet::Document;
use crate::errors::{Result, VaultError};

/// Indentation used when pretty-printing the document.
const INDENT: &[u8] = b"    ";

/// Serialize a document to pretty-printed JSON bytes.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut ser)
        .map_err(|e| VaultError::SerializationError(format!("document: {e}")))?;
    Ok(buf)
}

/// Write a document to disk **atomically**.
///
/// Writes to `.<file>.tmp` in the same directory, then renames it over
/// the target so a crash mid-write never leaves a truncated vault.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let buf = to_bytes(doc)?;

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Read and parse a document, reporting every failure.
///
/// - Missing file: [`VaultError::VaultNotFound`].
/// - Unparsable content, or a top-level value that is not an object of
///   snippet records: [`VaultError::CorruptStore`].
pub fn read_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(VaultError::VaultNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    serde_json::from_slice(&data).map_err(|e| VaultError::CorruptStore {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
