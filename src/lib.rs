pub mod cli;
pub mod config;
pub mod errors;
pub mod vault;

#[cfg(feature = "audit-log")]
pub mod audit;
