//! System clipboard access.

use crate::errors::{Result, VaultError};

/// Put `text` on the system clipboard.
///
/// On Linux the contents only outlive the process when a clipboard
/// manager is running.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| VaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| VaultError::ClipboardError(e.to_string()))
}

/// Copy `text`, downgrading any failure to a warning.
///
/// Returns `true` if the copy worked.
pub fn copy_or_warn(text: &str) -> bool {
    match copy(text) {
        Ok(()) => true,
        Err(e) => {
            super::output::warning(&format!("{e} — code was not copied."));
            false
        }
    }
}
