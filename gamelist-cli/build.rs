//! Build script for gamelist-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("gamelist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep game catalogs in sync with gamelist.xml")
        .long_about(
            "Command-line tool for scanning ROM directories and maintaining their gamelist.xml metadata",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (defaults to config.yaml in the data directory)")
                .value_name("PATH")
                .global(true)
                .env("GAMELIST_CONFIG"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("GAMELIST_DATA_DIR"),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List games and folders of the configured systems")
                .long_about("Scan the configured systems and display their catalog entries"),
            Command::new("sync")
                .about("Scan systems and rewrite their gamelists")
                .long_about(
                    "Scan each system, load its gamelist and write the reconciled gamelist back",
                ),
            Command::new("set")
                .about("Change one metadata value of a game or folder")
                .long_about("Validate and store a metadata value, then save the gamelist"),
            Command::new("relative-path")
                .about("Show a path relative to a root directory")
                .long_about("Print the path relative to the root, failing when it lies outside"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a gamelist configuration file for errors"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main gamelist.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("gamelist.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
