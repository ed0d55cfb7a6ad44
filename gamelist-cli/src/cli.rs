//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ListCommand, RelativePathCommand, SetCommand, SyncCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for keeping game catalogs in sync with gamelist.xml.
#[derive(Parser)]
#[command(name = "gamelist")]
#[command(version, about = "Keep game catalogs in sync with gamelist.xml", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file (defaults to config.yaml in the data directory)
    #[arg(long, value_name = "PATH", global = true, env = "GAMELIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "GAMELIST_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List games and folders of the configured systems
    List(ListCommand),

    /// Scan systems and rewrite their gamelists
    Sync(SyncCommand),

    /// Change one metadata value of a game or folder
    Set(SetCommand),

    /// Show a path relative to a root directory
    RelativePath(RelativePathCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),
}
