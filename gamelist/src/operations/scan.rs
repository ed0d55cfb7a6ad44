//! Populating a catalog from the filesystem.

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::catalog::{EntryKind, KindFilter};
use crate::error::{Error, Result};
use crate::system::System;

/// Result of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Game files registered (found or created).
    pub games: usize,
    /// Folder entries created to reach them.
    pub folders: usize,
    /// Files or directories that could not be registered.
    pub skipped: usize,
}

/// Registers every file under the system root whose extension is one of the
/// system's extensions as a game.
///
/// Directories are visited in file name order, symlinks are followed, and
/// hidden files and directories are skipped. Scanning an already scanned
/// root creates nothing new.
///
/// # Errors
///
/// Returns an error if the root itself cannot be read. Problems with single
/// files are logged and counted instead.
///
/// # Examples
///
/// ```no_run
/// use gamelist::operations::scan;
/// use gamelist::System;
///
/// let mut system = System::new("nes", "/roms/nes", "/roms/nes/gamelist.xml")
///     .with_extensions([".nes"]);
/// let summary = scan(&mut system).unwrap();
/// println!("{} games", summary.games);
/// ```
pub fn scan(system: &mut System) -> Result<ScanSummary> {
    let root = system.root_path().to_path_buf();
    if !root.is_dir() {
        return Err(Error::PathNotFound { path: root });
    }

    let folders_before = count_folders(system);
    let mut summary = ScanSummary::default();

    let walker = WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(Error::Io(e.into())),
            Err(e) => {
                log::warn!("Skipping unreadable entry under {}: {e}", root.display());
                summary.skipped += 1;
                continue;
            }
        };

        if !entry.file_type().is_file() || !system.has_extension(entry.path()) {
            continue;
        }

        match system.find_or_create(entry.path(), EntryKind::Game) {
            Ok(_) => summary.games += 1,
            Err(e) => {
                log::error!("Cannot add \"{}\": {e}", entry.path().display());
                summary.skipped += 1;
            }
        }
    }

    summary.folders = count_folders(system) - folders_before;
    log::debug!(
        "Scanned {}: {} games, {} new folders, {} skipped",
        root.display(),
        summary.games,
        summary.folders,
        summary.skipped
    );
    Ok(summary)
}

fn count_folders(system: &System) -> usize {
    let catalog = system.catalog();
    catalog.descendants(catalog.root(), KindFilter::Folders).len()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Returns `true` if `path` would be picked up by [`scan`] for `system`.
#[must_use]
pub fn is_game_file(system: &System, path: &Path) -> bool {
    path.is_file()
        && system.has_extension(path)
        && !path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_util::RomDir;

    fn game_names(system: &System) -> Vec<String> {
        let catalog = system.catalog();
        catalog
            .descendants(catalog.root(), KindFilter::Games)
            .into_iter()
            .map(|id| catalog.get(id).metadata().name().to_string())
            .collect()
    }

    #[test]
    fn test_scan_registers_matching_files() {
        let roms = RomDir::with_files(&["b.nes", "a.NES", "notes.txt", "sub/c.nes"]);
        let mut system = roms.system();

        let summary = scan(&mut system).unwrap();
        assert_eq!(
            summary,
            ScanSummary {
                games: 3,
                folders: 1,
                skipped: 0
            }
        );
        assert_eq!(game_names(&system), ["a", "b", "c"]);
    }

    #[test]
    fn test_scan_twice_creates_nothing() {
        let roms = RomDir::with_files(&["a.nes", "x/y/z.nes"]);
        let mut system = roms.system();

        scan(&mut system).unwrap();
        let len = system.catalog().len();
        let second = scan(&mut system).unwrap();

        assert_eq!(second.games, 2);
        assert_eq!(second.folders, 0);
        assert_eq!(system.catalog().len(), len);
    }

    #[test]
    fn test_hidden_entries_skipped() {
        let roms = RomDir::with_files(&[".hidden.nes", ".cache/a.nes", "b.nes"]);
        let mut system = roms.system();

        scan(&mut system).unwrap();
        assert_eq!(game_names(&system), ["b"]);
        assert!(!is_game_file(&system, &roms.path(".hidden.nes")));
        assert!(is_game_file(&system, &roms.path("b.nes")));
    }

    #[test]
    fn test_missing_root_is_error() {
        let roms = RomDir::with_files(&[]);
        let mut system = crate::System::new("nes", roms.path("missing"), roms.gamelist_path());
        assert!(scan(&mut system).unwrap_err().is_not_found());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_outside_root_skipped() {
        let roms = RomDir::with_files(&["a.nes"]);
        let outside = roms.dir.path().join("outside.nes");
        std::fs::write(&outside, "rom").unwrap();
        std::os::unix::fs::symlink(&outside, roms.path("link.nes")).unwrap();
        let mut system = roms.system();

        let summary = scan(&mut system).unwrap();
        assert_eq!(summary.games, 1);
        assert_eq!(summary.skipped, 1);
    }
}
