//! Configuration schema definitions.
//!
//! This module defines the configuration structure: the configured systems
//! and the settings that govern gamelist reads and writes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::FolderPathRule;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use gamelist::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "systems:\n  - name: nes\n    path: /roms/nes\n    extensions: [.nes, .zip]\n",
/// )
/// .unwrap();
/// assert_eq!(config.systems.len(), 1);
/// assert!(config.gamelist_settings().writes_enabled());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Configured systems, in display order.
    #[serde(default)]
    pub systems: Vec<SystemConfig>,

    /// Never write gamelist documents.
    pub disable_gamelist_writes: Option<bool>,

    /// Neither read nor write gamelist documents.
    pub ignore_gamelist: Option<bool>,

    /// How intermediate folder entries are named.
    pub intermediate_folder_paths: Option<FolderPathRule>,
}

impl Config {
    /// The read/write settings, with unset flags treated as `false`.
    #[must_use]
    pub fn gamelist_settings(&self) -> GamelistSettings {
        GamelistSettings {
            disable_writes: self.disable_gamelist_writes.unwrap_or(false),
            ignore_gamelist: self.ignore_gamelist.unwrap_or(false),
        }
    }

    /// The folder naming rule, defaulting to [`FolderPathRule::ParentPath`].
    #[must_use]
    pub fn folder_path_rule(&self) -> FolderPathRule {
        self.intermediate_folder_paths.unwrap_or_default()
    }

    /// Looks up a system by name.
    #[must_use]
    pub fn system(&self, name: &str) -> Option<&SystemConfig> {
        self.systems.iter().find(|s| s.name == name)
    }
}

/// One configured system: a root directory of games of one platform.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Short identifier, e.g. `nes`.
    pub name: String,

    /// Human-readable name.
    pub fullname: Option<String>,

    /// Root directory of the system's games.
    pub path: PathBuf,

    /// File extensions recognized as games, with leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Explicit gamelist document location.
    pub gamelist: Option<PathBuf>,
}

/// Switches controlling whether gamelists are read and written.
///
/// Passed explicitly to the operations that need them rather than read from
/// global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamelistSettings {
    /// Never write gamelist documents.
    pub disable_writes: bool,
    /// Neither read nor write gamelist documents.
    pub ignore_gamelist: bool,
}

impl GamelistSettings {
    /// Returns `true` when a save should touch the document.
    #[must_use]
    pub fn writes_enabled(&self) -> bool {
        !self.disable_writes && !self.ignore_gamelist
    }

    /// Returns `true` when a load should read the document.
    #[must_use]
    pub fn reads_enabled(&self) -> bool {
        !self.ignore_gamelist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.systems.is_empty());
        assert_eq!(config.gamelist_settings(), GamelistSettings::default());
        assert_eq!(config.folder_path_rule(), FolderPathRule::ParentPath);
    }

    #[test]
    fn test_full_config() {
        let yaml = r"
systems:
  - name: nes
    fullname: Nintendo Entertainment System
    path: /roms/nes
    extensions: [.nes, .zip]
  - name: snes
    path: /roms/snes
    gamelist: /data/snes.xml
disable_gamelist_writes: true
intermediate_folder_paths: parent-stem
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.systems.len(), 2);

        let nes = config.system("nes").unwrap();
        assert_eq!(nes.fullname.as_deref(), Some("Nintendo Entertainment System"));
        assert_eq!(nes.extensions, [".nes", ".zip"]);

        let snes = config.system("snes").unwrap();
        assert!(snes.extensions.is_empty());
        assert_eq!(snes.gamelist, Some(PathBuf::from("/data/snes.xml")));

        assert!(!config.gamelist_settings().writes_enabled());
        assert!(config.gamelist_settings().reads_enabled());
        assert_eq!(config.folder_path_rule(), FolderPathRule::ParentStem);
        assert!(config.system("gba").is_none());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("theme: carbon\n");
        assert!(result.is_err());

        let result: Result<Config, _> =
            serde_yaml::from_str("systems:\n  - name: a\n    path: /a\n    emulator: x\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_folder_rule_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("intermediate_folder_paths: stem\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_ignore_disables_reads_and_writes() {
        let settings = GamelistSettings {
            disable_writes: false,
            ignore_gamelist: true,
        };
        assert!(!settings.writes_enabled());
        assert!(!settings.reads_enabled());
    }
}
