//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: List catalog entries with their names
//! - `sync`: Scan, load and save gamelists
//! - `set`: Change one metadata value of a game or folder
//! - `relative_path`: Show a path relative to a root
//! - `validate`: Validate configuration file

pub mod list;
pub mod relative_path;
pub mod set;
pub mod sync;
pub mod validate;

pub use list::ListCommand;
pub use relative_path::RelativePathCommand;
pub use set::SetCommand;
pub use sync::SyncCommand;
pub use validate::ValidateCommand;
