//! Configuration file discovery and loading.
//!
//! A single YAML file configures every system. It is either named
//! explicitly or looked up as `config.yaml` inside the data directory;
//! a missing default file means an empty configuration.

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::path::normalize::normalize_against;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the data directory under the user's home.
pub const DATA_DIR_NAME: &str = ".gamelist";

/// Returns the default data directory (`~/.gamelist`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use gamelist::config::default_data_dir;
///
/// let data_dir = default_data_dir().unwrap();
/// println!("Data directory: {}", data_dir.display());
/// ```
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Loads configuration from disk.
///
/// # Examples
///
/// ```no_run
/// use gamelist::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load(None, Path::new("/home/pi/.gamelist")).unwrap();
/// println!("{} systems configured", config.systems.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load, override from the environment, and validate.
    ///
    /// With `explicit` set, that file must exist. Otherwise
    /// `{data_dir}/config.yaml` is used when present and an empty
    /// configuration when not.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an environment
    /// override is invalid, or validation fails.
    pub fn load(explicit: Option<&Path>, data_dir: &Path) -> Result<Config> {
        let mut config = match explicit {
            Some(path) => Self::load_file(path)?,
            None => {
                let path = Self::default_config_path(data_dir);
                if path.exists() {
                    Self::load_file(&path)?
                } else {
                    log::debug!("No configuration at {}, using defaults", path.display());
                    Config::default()
                }
            }
        };

        EnvironmentConfig::apply_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Path of the configuration file inside `data_dir`.
    #[must_use]
    pub fn default_config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// Relative system and gamelist paths are resolved against the directory
    /// containing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let mut config: Config = serde_yaml::from_str(&contents)?;

        let base = Self::base_dir(path)?;
        for system in &mut config.systems {
            system.path = normalize_against(&system.path, &base)?;
            if let Some(gamelist) = &system.gamelist {
                system.gamelist = Some(normalize_against(gamelist, &base)?);
            }
        }

        log::debug!(
            "Loaded {} system(s) from {}",
            config.systems.len(),
            path.display()
        );
        Ok(config)
    }

    /// Absolute directory containing `path`.
    fn base_dir(path: &Path) -> Result<PathBuf> {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        normalize_against(parent, &env::current_dir()?)
    }
}
