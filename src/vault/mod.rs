//! Vault module — local snippet storage.
//!
//! This module provides:
//! - `Snippet`, `SnippetUpdate`, and the `Document` map (`snippet`)
//! - The JSON file format with atomic writes (`format`)
//! - High-level `VaultStore` for CRUD and search over a vault file (`store`)

pub mod format;
pub mod snippet;
pub mod store;

// Re-export the most commonly used items.
pub use snippet::{Document, Snippet, SnippetUpdate, TIMESTAMP_FORMAT};
pub use store::VaultStore;
