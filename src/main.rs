//! Judge0 IDE settings tool
//!
//! Inspects and edits the IDE settings kept in persistent storage, with
//! optional URL query overrides applied the same way the page applies them.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::ConfigSubcommand;

/// Judge0 IDE settings tool
#[derive(Parser, Debug)]
#[command(name = "judge0-ide")]
#[command(version, about = "Settings store for the Judge0 online IDE", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Page URL whose query parameters override stored settings
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = cli::init_logging(args.debug);

    // Print log file location to stderr so it stays out of command output
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    match args.command {
        Command::Config { subcommand } => {
            cli::handle_config_command(subcommand, args.url.as_deref())
        }
    }
}
