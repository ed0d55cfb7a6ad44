//! Set command implementation.
//!
//! Changes a single metadata value of a game or folder and saves the
//! system's gamelist.

use crate::error::CliError;
use crate::utils::{load_configuration, prepare_system, select_systems, GlobalOptions};
use clap::Args;
use gamelist::operations::is_game_file;
use gamelist::path::normalize::anchor_to;
use gamelist::{save, EntryKind};
use std::env;
use std::path::PathBuf;

/// Change one metadata value of a game or folder.
#[derive(Args)]
pub struct SetCommand {
    /// System the entry belongs to
    #[arg(long, value_name = "NAME")]
    pub system: String,

    /// Path of the game file or folder
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Metadata key (e.g. name, desc, rating)
    #[arg(long, value_name = "KEY")]
    pub key: String,

    /// New value
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let settings = config.gamelist_settings();
        if !settings.writes_enabled() {
            return Err(CliError::SemanticFailure(
                "Gamelist writes are disabled; nothing changed".to_string(),
            ));
        }

        let mut systems = select_systems(global, &config, Some(&self.system))?;
        let mut system = systems.remove(0);
        prepare_system(&mut system, &settings)?;

        // `..` is left for canonicalization so symlinks are followed
        let path = anchor_to(&self.path, &env::current_dir()?);
        let kind = if path.is_dir() {
            EntryKind::Folder
        } else if is_game_file(&system, &path) {
            EntryKind::Game
        } else {
            return Err(CliError::InvalidArguments(format!(
                "{} is not a {} game file",
                path.display(),
                system.display_name()
            )));
        };

        let id = system.find_or_create(&path, kind)?;
        let entry = system.catalog_mut().get_mut(id);
        entry
            .metadata()
            .validate(&self.key, &self.value)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        entry.metadata_mut().set(&self.key, self.value.as_str());

        let summary = save(&system, &settings)?;
        if !global.quiet {
            println!(
                "Set {} of {} ({} entries written)",
                self.key,
                path.display(),
                summary.written
            );
        }

        Ok(())
    }
}
