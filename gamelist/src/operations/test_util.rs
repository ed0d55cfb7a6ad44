//! Shared test utilities for operation unit tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{tempdir, TempDir};

use crate::system::{System, GAMELIST_FILE_NAME};

/// A ROM directory in a temporary sandbox.
pub struct RomDir {
    /// Keeps the sandbox alive.
    pub dir: TempDir,
    /// System root, `<sandbox>/nes`.
    pub root: PathBuf,
}

impl RomDir {
    /// Creates `<sandbox>/nes` holding `files` (relative paths).
    ///
    /// # Panics
    ///
    /// Panics if the sandbox cannot be created.
    #[must_use]
    pub fn with_files(files: &[&str]) -> Self {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nes");
        fs::create_dir_all(&root).unwrap();
        let rom_dir = Self { dir, root };
        for file in files {
            rom_dir.add_file(file);
        }
        rom_dir
    }

    /// Creates a file (and its parents) under the root.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn add_file(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "rom").unwrap();
        path
    }

    /// Path of `relative` under the root.
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Gamelist location beside the ROMs.
    #[must_use]
    pub fn gamelist_path(&self) -> PathBuf {
        self.root.join(GAMELIST_FILE_NAME)
    }

    /// Writes the gamelist document.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_gamelist(&self, xml: &str) {
        fs::write(self.gamelist_path(), xml).unwrap();
    }

    /// Reads the gamelist document back.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read_gamelist(&self) -> String {
        fs::read_to_string(self.gamelist_path()).unwrap()
    }

    /// A `nes` system over this directory recognizing `.nes` files.
    #[must_use]
    pub fn system(&self) -> System {
        System::new("nes", &self.root, self.gamelist_path()).with_extensions([".nes"])
    }
}

/// Generic string form of `path`, as stored in documents.
#[must_use]
pub fn stored(path: &Path) -> String {
    crate::path::to_generic_string(path)
}
