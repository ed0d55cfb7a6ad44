//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution, configuration loading, and system setup.

use crate::error::CliError;
use gamelist::config::{default_data_dir, ConfigLoader};
use gamelist::path::normalize::normalize_against;
use gamelist::system::{system_from_config, systems_from_config};
use gamelist::{load, scan, Config, GamelistSettings, LoadSummary, ScanSummary, System};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,
}

/// Normalize a path (make absolute, expand ~, resolve `.` and `..`) without
/// following symlinks.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    let cwd = env::current_dir()?;
    normalize_against(path, &cwd).map_err(CliError::from)
}

/// Resolve the data directory: `--data-dir` (or `GAMELIST_DATA_DIR`), else
/// `~/.gamelist`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => normalize_path(dir),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load configuration.
///
/// Precedence:
/// 1. Environment variables (`GAMELIST_*`)
/// 2. The `--config` file, or `config.yaml` in the data directory
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let explicit = match &global.config {
        Some(path) => Some(normalize_path(path)?),
        None => None,
    };

    ConfigLoader::load(explicit.as_deref(), &data_dir).map_err(|e| CliError::Config(e.to_string()))
}

/// Build the systems a command works on: the one named `name`, or all of
/// them.
pub fn select_systems(
    global: &GlobalOptions,
    config: &Config,
    name: Option<&str>,
) -> Result<Vec<System>, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let systems = match name {
        Some(name) => vec![system_from_config(config, name, &data_dir)?],
        None => systems_from_config(config, &data_dir)?,
    };

    if systems.is_empty() {
        return Err(CliError::Config(
            "No systems configured (add them to config.yaml)".to_string(),
        ));
    }
    Ok(systems)
}

/// Scan a system's root and, unless gamelists are ignored, load its
/// gamelist.
pub fn prepare_system(
    system: &mut System,
    settings: &GamelistSettings,
) -> Result<(ScanSummary, LoadSummary), CliError> {
    let scanned = scan(system)?;
    let loaded = if settings.reads_enabled() {
        load(system)?
    } else {
        LoadSummary::default()
    };
    Ok((scanned, loaded))
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
