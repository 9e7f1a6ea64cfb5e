//! One module per `sv` subcommand.

pub mod add;
pub mod audit_cmd;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;
pub mod search;
pub mod template;
