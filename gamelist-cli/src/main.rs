//! Main entry point for the gamelist CLI.
//!
//! This is the command-line interface for keeping game catalogs in sync with
//! their `gamelist.xml` documents:
//! - `list`: List games and folders
//! - `sync`: Scan systems and rewrite their gamelists
//! - `set`: Change one metadata value
//! - `relative-path`: Show a path relative to a root
//! - `validate`: Validate a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = gamelist::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        data_dir: cli.data_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Sync(cmd) => cmd.execute(&global),
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::RelativePath(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
