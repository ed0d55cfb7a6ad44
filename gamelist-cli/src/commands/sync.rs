//! Sync command implementation.
//!
//! Scans each system's root, loads its gamelist and writes the reconciled
//! gamelist back.

use crate::error::CliError;
use crate::utils::{
    load_configuration, prepare_system, select_systems, shorten_path, GlobalOptions,
};
use clap::Args;
use gamelist::{save, SavePlan, SaveSummary};

/// Scan, load and save gamelists.
#[derive(Args)]
pub struct SyncCommand {
    /// Only sync this system
    #[arg(long, value_name = "NAME")]
    pub system: Option<String>,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncCommand {
    /// Execute the sync command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let settings = config.gamelist_settings();

        for mut system in select_systems(global, &config, self.system.as_deref())? {
            let (scanned, loaded) = prepare_system(&mut system, &settings)?;

            let saved = if self.dry_run {
                if settings.writes_enabled() {
                    SavePlan::build(&system)?.summary()
                } else {
                    SaveSummary::skipped()
                }
            } else {
                save(&system, &settings)?
            };

            if !global.quiet {
                println!(
                    "{}: {} games, {} new folders, {} skipped",
                    system.display_name(),
                    scanned.games,
                    scanned.folders,
                    scanned.skipped
                );
                println!(
                    "  loaded {} of {} gamelist entries ({} stale, {} rejected)",
                    loaded.loaded,
                    loaded.total(),
                    loaded.stale,
                    loaded.rejected
                );
                print_save_summary(&saved, self.dry_run, &shorten_path(system.gamelist_path()));
            }
        }

        Ok(())
    }
}

fn print_save_summary(summary: &SaveSummary, dry_run: bool, path: &str) {
    if summary.skipped {
        println!("  gamelist writes disabled, {path} left untouched");
        return;
    }

    let verb = if dry_run { "would write" } else { "wrote" };
    println!(
        "  {verb} {path}: {} entries, {} elided, {} replaced, {} preserved",
        summary.written, summary.elided, summary.replaced, summary.preserved
    );
}
