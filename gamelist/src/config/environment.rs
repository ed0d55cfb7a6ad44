//! Environment variable handling for configuration overrides.
//!
//! This module provides support for GAMELIST_* environment variables that
//! override configuration file values.

use crate::catalog::FolderPathRule;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use gamelist::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `GAMELIST_DISABLE_WRITES`, `GAMELIST_IGNORE_GAMELIST` and
    /// `GAMELIST_FOLDER_PATHS`; values set there win over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("GAMELIST_DISABLE_WRITES") {
            config.disable_gamelist_writes =
                Some(Self::parse_bool("GAMELIST_DISABLE_WRITES", &val)?);
        }

        if let Ok(val) = env::var("GAMELIST_IGNORE_GAMELIST") {
            config.ignore_gamelist = Some(Self::parse_bool("GAMELIST_IGNORE_GAMELIST", &val)?);
        }

        if let Ok(val) = env::var("GAMELIST_FOLDER_PATHS") {
            config.intermediate_folder_paths =
                Some(FolderPathRule::parse(&val).ok_or_else(|| Error::Validation {
                    field: "GAMELIST_FOLDER_PATHS".into(),
                    message: format!(
                        "Invalid folder path rule: '{val}' (expected parent-path/parent-stem)"
                    ),
                })?);
        }

        Ok(())
    }

    /// Parse boolean from string.
    ///
    /// Accepts: true/false, 1/0, yes/no, on/off (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
