//! Configured game systems.
//!
//! A [`System`] ties a root directory of games to the gamelist document that
//! records their metadata, and owns the [`Catalog`] built from both.

use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, EntryId, EntryKind, FolderPathRule};
use crate::config::{Config, SystemConfig};
use crate::error::{Error, Result};
use crate::path::normalize::expand_tilde;

/// File name of gamelist documents.
pub const GAMELIST_FILE_NAME: &str = "gamelist.xml";

/// A named root directory of games with its catalog.
///
/// # Examples
///
/// ```
/// use gamelist::System;
/// use std::path::Path;
///
/// let system = System::new("nes", "/roms/nes", "/roms/nes/gamelist.xml")
///     .with_extensions([".nes", ".ZIP"]);
/// assert!(system.has_extension(Path::new("/roms/nes/Contra.zip")));
/// assert!(!system.has_extension(Path::new("/roms/nes/notes.txt")));
/// assert_eq!(system.display_name(), "nes");
/// ```
#[derive(Debug, Clone)]
pub struct System {
    name: String,
    full_name: Option<String>,
    root_path: PathBuf,
    gamelist_path: PathBuf,
    extensions: Vec<String>,
    folder_paths: FolderPathRule,
    catalog: Catalog,
}

impl System {
    /// Creates a system with an empty catalog rooted at `root_path`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        root_path: impl Into<PathBuf>,
        gamelist_path: impl Into<PathBuf>,
    ) -> Self {
        let root_path = root_path.into();
        Self {
            name: name.into(),
            full_name: None,
            catalog: Catalog::new(root_path.clone()),
            root_path,
            gamelist_path: gamelist_path.into(),
            extensions: Vec::new(),
            folder_paths: FolderPathRule::default(),
        }
    }

    /// Sets the human-readable name.
    #[must_use]
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Sets the recognized game file extensions.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how intermediate folders are named.
    #[must_use]
    pub fn with_folder_paths(mut self, rule: FolderPathRule) -> Self {
        self.folder_paths = rule;
        self
    }

    /// Builds a system from its configuration entry.
    ///
    /// The gamelist location is, in order: the configured one,
    /// `<root>/gamelist.xml` if that file exists, or
    /// `<data_dir>/gamelists/<name>/gamelist.xml`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured path cannot be expanded.
    pub fn from_config(system: &SystemConfig, config: &Config, data_dir: &Path) -> Result<Self> {
        let root_path = expand_tilde(&system.path)?;
        let gamelist_path = match &system.gamelist {
            Some(path) => expand_tilde(path)?,
            None => default_gamelist_path(&system.name, &root_path, data_dir),
        };

        let mut built = Self::new(&system.name, root_path, gamelist_path)
            .with_extensions(system.extensions.iter().cloned())
            .with_folder_paths(config.folder_path_rule());
        if let Some(full_name) = &system.fullname {
            built = built.with_full_name(full_name);
        }

        log::debug!(
            "System {}: root {}, gamelist {}",
            built.name,
            built.root_path.display(),
            built.gamelist_path.display()
        );
        Ok(built)
    }

    /// Short identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable name, if configured.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Full name when configured, otherwise the short name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name().unwrap_or(&self.name)
    }

    /// Root directory of the system's games.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Location of the gamelist document.
    #[must_use]
    pub fn gamelist_path(&self) -> &Path {
        &self.gamelist_path
    }

    /// Recognized extensions, as configured.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Intermediate folder naming rule.
    #[must_use]
    pub fn folder_paths(&self) -> FolderPathRule {
        self.folder_paths
    }

    /// The catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access to the catalog.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Looks up or creates the entry for `path` using this system's folder
    /// naming rule. See [`Catalog::find_or_create`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Catalog::find_or_create`].
    pub fn find_or_create(&mut self, path: &Path, kind: EntryKind) -> Result<EntryId> {
        self.catalog.find_or_create(path, kind, self.folder_paths)
    }

    /// Returns `true` if the file name of `path` ends in one of the
    /// system's extensions, ignoring ASCII case.
    #[must_use]
    pub fn has_extension(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let file_name = file_name.to_ascii_lowercase();
        self.extensions.iter().any(|ext| {
            let ext = ext.to_ascii_lowercase();
            file_name.len() > ext.len() && file_name.ends_with(&ext)
        })
    }
}

/// Default gamelist location for a system with no configured one.
#[must_use]
pub fn default_gamelist_path(name: &str, root_path: &Path, data_dir: &Path) -> PathBuf {
    let beside_roms = root_path.join(GAMELIST_FILE_NAME);
    if beside_roms.exists() {
        return beside_roms;
    }
    data_dir.join("gamelists").join(name).join(GAMELIST_FILE_NAME)
}

/// Builds every configured system, in configuration order.
///
/// # Errors
///
/// Returns the first error from [`System::from_config`].
pub fn systems_from_config(config: &Config, data_dir: &Path) -> Result<Vec<System>> {
    config
        .systems
        .iter()
        .map(|system| System::from_config(system, config, data_dir))
        .collect()
}

/// Builds the configured system called `name`.
///
/// # Errors
///
/// Returns `UnknownSystem` when no system has that name.
pub fn system_from_config(config: &Config, name: &str, data_dir: &Path) -> Result<System> {
    let system = config.system(name).ok_or_else(|| Error::UnknownSystem {
        name: name.to_string(),
    })?;
    System::from_config(system, config, data_dir)
}
