//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod logging;

pub use commands::{handle_config_command, ConfigSubcommand};
pub use logging::*;
