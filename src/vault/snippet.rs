//! Snippet records and the document that holds them.
//!
//! A snippet's name is not part of the record: it is the key under
//! which the record is stored in the [`Document`].

use chrono::Local;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Format of the `timestamp` field: local time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The whole vault: snippet name -> record, in insertion order.
pub type Document = IndexMap<String, Snippet>;

/// A single stored snippet.
///
/// Missing fields deserialize as empty strings so hand-edited files load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snippet {
    /// The raw snippet text (may span multiple lines).
    pub code: String,

    /// Language hint, always lower-case.
    pub language: String,

    /// Free-text description.
    pub description: String,

    /// Last-modified time, formatted with [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
}

impl Snippet {
    /// Build a new record, normalizing the language and stamping the
    /// current local time.
    pub fn new(code: &str, language: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            language: normalize_language(language),
            description: description.to_string(),
            timestamp: now_timestamp(),
        }
    }

    /// Apply a partial update. Always refreshes the timestamp.
    ///
    /// Blank replacement code is ignored so a snippet never loses its code.
    pub fn apply(&mut self, update: SnippetUpdate) {
        if let Some(code) = update.code.filter(|c| !c.trim().is_empty()) {
            self.code = code;
        }
        if let Some(language) = update.language {
            self.language = normalize_language(&language);
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.timestamp = now_timestamp();
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches(&self, name: &str, needle: &str) -> bool {
        name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Fields to change on an existing snippet.
///
/// `None` leaves a field untouched; `Some(String::new())` clears the
/// language or description.  Code can't be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetUpdate {
    pub code: Option<String>,
    pub language: Option<String>,
    pub description: Option<String>,
}

impl SnippetUpdate {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if no field would change.
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.language.is_none() && self.description.is_none()
    }
}

/// Lower-case a language label for storage.
pub fn normalize_language(language: &str) -> String {
    language.to_lowercase()
}

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
