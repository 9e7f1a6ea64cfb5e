//! Configuration module — user settings from `~/.syntaxvault.toml`.

pub mod settings;

pub use settings::{home_dir, Settings};
