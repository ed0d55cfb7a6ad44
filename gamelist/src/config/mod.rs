//! Configuration system for gamelist.
//!
//! This module provides:
//! - A YAML configuration file listing the systems
//! - Environment variable overrides (`GAMELIST_*`)
//! - Validation
//!
//! # Configuration File
//!
//! ```yaml
//! systems:
//!   - name: nes
//!     fullname: Nintendo Entertainment System
//!     path: ~/roms/nes
//!     extensions: [.nes, .zip]
//!     gamelist: ~/roms/nes/gamelist.xml   # optional
//! disable_gamelist_writes: false
//! ignore_gamelist: false
//! intermediate_folder_paths: parent-path  # or parent-stem
//! ```
//!
//! Relative paths are resolved against the directory holding the file.
//!
//! # Precedence
//!
//! Environment variables win over the file, which wins over built-in
//! defaults.
//!
//! # Examples
//!
//! ```
//! use gamelist::config::{Config, ConfigValidator};
//!
//! let config: Config = serde_yaml::from_str("ignore_gamelist: true\n").unwrap();
//! ConfigValidator::validate(&config).unwrap();
//! assert!(!config.gamelist_settings().writes_enabled());
//! ```

pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, CONFIG_FILE_NAME};
pub use schema::{Config, GamelistSettings, SystemConfig};
pub use validator::ConfigValidator;
