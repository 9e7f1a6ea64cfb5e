//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` is a handle on one vault file.  Every operation reads
//! the whole document, and every mutating operation writes it back, so
//! the store holds no state besides its path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Result, VaultError};

use super::format;
use super::snippet::{Document, Snippet, SnippetUpdate};

/// Handle on a single JSON vault file.
#[derive(Debug, Clone)]
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a handle for the vault at `path`.  Touches nothing on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a handle and make sure the backing file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.ensure_initialized()?;
        Ok(store)
    }

    /// Create the backing file containing `{}` if it does not exist.
    ///
    /// Missing parent directories are created.  An existing file is
    /// never modified.
    pub fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        format::write_document(&self.path, &Document::new())
    }

    // ------------------------------------------------------------------
    // Whole-document access
    // ------------------------------------------------------------------

    /// Load the document, substituting an empty one if the file is
    /// missing, unparsable, or can't be read at all.
    ///
    /// Read-only callers get an empty vault for any failure; use
    /// [`VaultStore::try_load`] to tell the cases apart.  Mutating
    /// operations don't go through here, so an I/O failure never turns
    /// into a write.
    pub fn load(&self) -> Document {
        self.try_load().unwrap_or_default()
    }

    /// Load the document, reporting corrupt content as
    /// [`VaultError::CorruptStore`].  A missing file is an empty vault.
    pub fn try_load(&self) -> Result<Document> {
        match format::read_document(&self.path) {
            Ok(doc) => Ok(doc),
            Err(VaultError::VaultNotFound(_)) => Ok(Document::new()),
            Err(e) => Err(e),
        }
    }

    /// Document to modify: corrupt content counts as empty, other read
    /// failures are returned.
    fn load_for_write(&self) -> Result<Document> {
        match self.try_load() {
            Err(VaultError::CorruptStore { .. }) => Ok(Document::new()),
            other => other,
        }
    }

    /// Overwrite the backing file with `doc`.
    pub fn save(&self, doc: &Document) -> Result<()> {
        format::write_document(&self.path, doc)
    }

    // ------------------------------------------------------------------
    // Snippet operations
    // ------------------------------------------------------------------

    /// Insert a snippet under `name`.
    ///
    /// An existing snippet with the same name is replaced; callers that
    /// want to reject duplicates should check [`VaultStore::contains`]
    /// first.
    pub fn add_snippet(
        &self,
        name: &str,
        code: &str,
        language: &str,
        description: &str,
    ) -> Result<()> {
        let mut doc = self.load_for_write()?;
        doc.insert(name.to_string(), Snippet::new(code, language, description));
        self.save(&doc)
    }

    /// Look up a snippet by exact name.
    pub fn get_snippet(&self, name: &str) -> Option<Snippet> {
        self.load().shift_remove(name)
    }

    /// Returns `true` if a snippet with exactly this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.load().contains_key(name)
    }

    /// Remove a snippet.  Returns `false` (and writes nothing) if it
    /// was not there.
    pub fn delete_snippet(&self, name: &str) -> Result<bool> {
        let mut doc = self.load_for_write()?;
        if doc.shift_remove(name).is_none() {
            return Ok(false);
        }
        self.save(&doc)?;
        Ok(true)
    }

    /// Snippets whose name or description contains `query`, ignoring
    /// case.  An empty query matches everything.  Order is preserved.
    pub fn search_snippets(&self, query: &str) -> Document {
        let needle = query.to_lowercase();
        self.load()
            .into_iter()
            .filter(|(name, snippet)| snippet.matches(name, &needle))
            .collect()
    }

    /// Apply `update` to an existing snippet and refresh its timestamp.
    ///
    /// Returns `false` (and writes nothing) if the snippet does not exist.
    pub fn update_snippet(&self, name: &str, update: SnippetUpdate) -> Result<bool> {
        let mut doc = self.load_for_write()?;
        let Some(snippet) = doc.get_mut(name) else {
            return Ok(false);
        };
        snippet.apply(update);
        self.save(&doc)?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory holding the vault file.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, VaultStore) {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("vault.json"));
        (dir, store)
    }

    #[test]
    fn new_does_not_touch_disk() {
        let (_dir, store) = store();
        assert!(!store.path().exists());
    }

    #[test]
    fn ensure_initialized_creates_empty_object() {
        let (_dir, store) = store();
        store.ensure_initialized().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn ensure_initialized_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("a").join("b").join("vault.json"));
        store.ensure_initialized().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn load_missing_file_is_empty() {
        let (_dir, store) = store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn try_load_distinguishes_corrupt_from_empty() {
        let (_dir, store) = store();
        assert!(store.try_load().unwrap().is_empty());

        fs::write(store.path(), "garbage").unwrap();
        assert!(matches!(
            store.try_load(),
            Err(VaultError::CorruptStore { .. })
        ));
        assert!(store.load().is_empty());
    }

    #[test]
    fn read_errors_reach_mutating_operations() {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path());

        assert!(store.load().is_empty());
        assert!(matches!(store.try_load(), Err(VaultError::Io(_))));
        assert!(matches!(store.delete_snippet("x"), Err(VaultError::Io(_))));
        assert!(matches!(
            store.update_snippet("x", SnippetUpdate::default()),
            Err(VaultError::Io(_))
        ));
        assert!(store.add_snippet("x", "1", "text", "").is_err());
    }

    #[test]
    fn add_overwrites_existing_name() {
        let (_dir, store) = store();
        store.add_snippet("x", "one", "text", "").unwrap();
        store.add_snippet("x", "two", "text", "").unwrap();

        let doc = store.load();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc["x"].code, "two");
    }

    #[test]
    fn get_is_case_sensitive() {
        let (_dir, store) = store();
        store.add_snippet("Fib", "f", "python", "").unwrap();
        assert!(store.get_snippet("Fib").is_some());
        assert!(store.get_snippet("fib").is_none());
        assert!(store.contains("Fib"));
        assert!(!store.contains("fib"));
    }

    #[test]
    fn search_empty_query_matches_all_in_order() {
        let (_dir, store) = store();
        store.add_snippet("b", "1", "text", "").unwrap();
        store.add_snippet("a", "2", "text", "").unwrap();

        let keys: Vec<String> = store.search_snippets("").into_keys().collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn update_missing_returns_false_without_creating_file() {
        let (_dir, store) = store();
        let updated = store
            .update_snippet("nope", SnippetUpdate::default().code("x"))
            .unwrap();
        assert!(!updated);
        assert!(!store.path().exists());
    }

    #[test]
    fn dir_is_parent_of_path() {
        let store = VaultStore::new("/tmp/sv/vault.json");
        assert_eq!(store.dir(), Path::new("/tmp/sv"));

        let bare = VaultStore::new("vault.json");
        assert_eq!(bare.dir(), Path::new("."));
    }
}
