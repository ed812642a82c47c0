//! CLI command handlers.

mod commands;
mod serve;

pub use commands::{Cli, Commands};
pub use serve::run_server;
