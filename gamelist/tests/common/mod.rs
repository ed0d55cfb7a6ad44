//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for ROM directories and their
//! gamelists in a temporary sandbox.

use std::fs;
use std::path::{Path, PathBuf};

use gamelist::{GamelistSettings, System};
use tempfile::TempDir;

/// Settings with reads and writes enabled.
#[allow(dead_code)]
pub const WRITES_ENABLED: GamelistSettings = GamelistSettings {
    disable_writes: false,
    ignore_gamelist: false,
};

/// Builder for a temporary ROM directory.
///
/// # Examples
///
/// ```no_run
/// # use common::RomFixture;
/// let fixture = RomFixture::new("nes")
///     .with_file("a.nes")
///     .with_file("hacks/x.nes")
///     .build();
/// ```
pub struct RomFixture {
    system: String,
    files: Vec<String>,
    gamelist: Option<String>,
}

/// A built ROM directory. The sandbox lives as long as this value.
pub struct RomTree {
    /// Keeps the sandbox alive.
    pub dir: TempDir,
    /// System name.
    pub system: String,
    /// System root, `<sandbox>/roms/<system>`.
    pub root: PathBuf,
}

#[allow(dead_code)]
impl RomFixture {
    /// Starts a fixture for a system called `system`.
    pub fn new(system: &str) -> Self {
        Self {
            system: system.to_string(),
            files: Vec::new(),
            gamelist: None,
        }
    }

    /// Adds a game file, relative to the root.
    pub fn with_file(mut self, relative: &str) -> Self {
        self.files.push(relative.to_string());
        self
    }

    /// Writes a gamelist beside the ROMs. `{root}` in `xml` is replaced by
    /// the root path in generic form.
    pub fn with_gamelist(mut self, xml: &str) -> Self {
        self.gamelist = Some(xml.to_string());
        self
    }

    /// Creates the sandbox.
    ///
    /// # Panics
    ///
    /// Panics if any file cannot be written.
    pub fn build(self) -> RomTree {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("roms").join(&self.system);
        fs::create_dir_all(&root).unwrap();

        let tree = RomTree {
            dir,
            system: self.system,
            root,
        };
        for file in &self.files {
            tree.add_file(file);
        }
        if let Some(xml) = self.gamelist {
            tree.write_gamelist(&xml);
        }
        tree
    }
}

#[allow(dead_code)]
impl RomTree {
    /// Path of `relative` under the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Generic string form of `relative` under the root.
    pub fn stored(&self, relative: &str) -> String {
        gamelist::path::to_generic_string(&self.path(relative))
    }

    /// Creates a game file (and its directories).
    pub fn add_file(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "rom").unwrap();
        path
    }

    /// Gamelist location beside the ROMs.
    pub fn gamelist_path(&self) -> PathBuf {
        self.root.join("gamelist.xml")
    }

    /// Writes the gamelist, expanding `{root}`.
    pub fn write_gamelist(&self, xml: &str) {
        let root = gamelist::path::to_generic_string(&self.root);
        fs::write(self.gamelist_path(), xml.replace("{root}", &root)).unwrap();
    }

    /// Reads the gamelist back.
    pub fn read_gamelist(&self) -> String {
        fs::read_to_string(self.gamelist_path()).unwrap()
    }

    /// A system over this tree recognizing `.nes` and `.zip` files.
    pub fn system(&self) -> System {
        System::new(&self.system, &self.root, self.gamelist_path()).with_extensions([".nes", ".zip"])
    }

    /// Scans and loads a fresh system.
    pub fn loaded_system(&self) -> System {
        let mut system = self.system();
        gamelist::scan(&mut system).unwrap();
        gamelist::load(&mut system).unwrap();
        system
    }

    /// Sandbox directory.
    pub fn sandbox(&self) -> &Path {
        self.dir.path()
    }
}
