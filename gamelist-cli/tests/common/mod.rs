//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - ROM directory and configuration fixtures

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak configuration into a test.
const ISOLATED_VARS: [&str; 7] = [
    "GAMELIST_CONFIG",
    "GAMELIST_LOG_MODE",
    "GAMELIST_DATA_DIR",
    "GAMELIST_DISABLE_WRITES",
    "GAMELIST_IGNORE_GAMELIST",
    "GAMELIST_FOLDER_PATHS",
    "GAMELIST_OUTPUT_FORMAT",
];

/// Test environment with an isolated data directory and one ROM root.
///
/// The environment contains:
/// - `roms/nes`: the ROM root of the `nes` system (extensions `.nes`, `.zip`)
/// - `gamelist-data/config.yaml`: configuration naming that system
/// - `roms/nes/gamelist.xml`: the system's gamelist path (not created)
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the gamelist data directory
    pub data_dir: PathBuf,
    /// Root of the `nes` system
    pub roms: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with a configured `nes` system.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let data_dir = temp_path.join("gamelist-data");
        let roms = temp_path.join("roms").join("nes");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        fs::create_dir_all(&roms).expect("Failed to create ROM root");

        let env = Self {
            temp_dir,
            temp_path,
            data_dir,
            roms,
        };
        env.write_config("");
        env
    }

    /// Write `config.yaml` with the `nes` system followed by `extra` lines.
    pub fn write_config(&self, extra: &str) {
        let config = format!(
            "systems:\n  - name: nes\n    fullname: Nintendo Entertainment System\n    path: {}\n    extensions: [\".nes\", \".zip\"]\n    gamelist: {}\n{extra}",
            self.roms.display(),
            self.gamelist_path().display()
        );
        fs::write(self.data_dir.join("config.yaml"), config).expect("Failed to write config");
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// This returns a Command with only the gamelist binary and a clean
    /// environment, allowing tests to control every flag.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("gamelist").expect("Failed to find gamelist binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of a file under the ROM root.
    pub fn rom(&self, relative: &str) -> PathBuf {
        self.roms.join(relative)
    }

    /// Create a ROM file (and its directories) under the ROM root.
    pub fn add_rom(&self, relative: &str) -> PathBuf {
        let path = self.rom(relative);
        fs::create_dir_all(path.parent().expect("ROM has a parent"))
            .expect("Failed to create ROM directory");
        fs::write(&path, "rom").expect("Failed to write ROM");
        path
    }

    /// Path of the `nes` gamelist.
    pub fn gamelist_path(&self) -> PathBuf {
        self.roms.join("gamelist.xml")
    }

    /// Write the `nes` gamelist.
    pub fn write_gamelist(&self, contents: &str) {
        fs::write(self.gamelist_path(), contents).expect("Failed to write gamelist");
    }

    /// Read the `nes` gamelist.
    pub fn read_gamelist(&self) -> String {
        fs::read_to_string(self.gamelist_path()).expect("Failed to read gamelist")
    }

    /// Run `gamelist sync` and assert success.
    pub fn sync(&self) -> String {
        let output = self
            .command()
            .arg("sync")
            .output()
            .expect("Failed to run sync command");

        assert!(
            output.status.success(),
            "Sync failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Run `gamelist set` on a ROM and assert success.
    pub fn set(&self, relative: &str, key: &str, value: &str) {
        let output = self
            .command()
            .args(["set", "--system", "nes", "--path"])
            .arg(self.rom(relative))
            .args(["--key", key, "--value", value])
            .output()
            .expect("Failed to run set command");

        assert!(
            output.status.success(),
            "Set failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Run `gamelist list` in the given format and return stdout.
    pub fn list_as(&self, format: &str) -> String {
        let output = self
            .command()
            .args(["list", "--format", format])
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Run `gamelist list` as a table and return stdout.
    pub fn list(&self) -> String {
        self.list_as("table")
    }
}
