//! Relative path command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use gamelist::path::to_generic_string;
use gamelist::{is_contained_and_relative, Containment};
use std::path::PathBuf;

/// Show a path relative to a root directory.
#[derive(Args)]
pub struct RelativePathCommand {
    /// Root directory
    #[arg(long, value_name = "ROOT")]
    pub root: PathBuf,

    /// Path to express relative to the root
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl RelativePathCommand {
    /// Execute the relative-path command.
    ///
    /// Both paths must exist. Prints `.` for the root itself.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        match is_contained_and_relative(&self.path, &self.root)? {
            Containment::Inside(relative) if relative.as_os_str().is_empty() => {
                println!(".");
                Ok(())
            }
            Containment::Inside(relative) => {
                println!("{}", to_generic_string(&relative));
                Ok(())
            }
            Containment::Outside(canonical) => Err(CliError::SemanticFailure(format!(
                "{} is outside {}",
                canonical.display(),
                self.root.display()
            ))),
        }
    }
}
