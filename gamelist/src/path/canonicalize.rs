//! Path canonicalization and file equivalence.
//!
//! Canonicalization follows symlinks and resolves `.`/`..` to the real path
//! on the filesystem, so it requires the path to exist.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use gamelist::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Check whether two paths name the same file on disk.
///
/// Both paths must exist; if either does not (or cannot be inspected) the
/// answer is `false`. On Unix this compares device and inode numbers, so
/// hard links and symlinks to the same file are equivalent. Elsewhere the
/// canonical paths are compared.
#[must_use]
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        match (fs::metadata(a), fs::metadata(b)) {
            (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    {
        match (canonicalize(a), canonicalize(b)) {
            (Ok(ca), Ok(cb)) => ca == cb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_canonicalize_nonexistent() {
        let result = canonicalize(Path::new("/nonexistent/path/xyz"));
        assert!(matches!(result.unwrap_err(), Error::PathNotFound { .. }));
    }

    #[test]
    fn test_canonicalize_resolves_dots() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        let dotted = dir.path().join("a").join("..").join(".").join("a");

        let canonical = canonicalize(&dotted).unwrap();
        assert_eq!(canonical, fs::canonicalize(dir.path().join("a")).unwrap());
    }

    #[test]
    fn test_same_file_identical_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("game.nes");
        fs::write(&file, "rom").unwrap();

        assert!(is_same_file(&file, &file));
    }

    #[test]
    fn test_same_file_different_files() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.nes");
        let b = dir.path().join("b.nes");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        assert!(!is_same_file(&a, &b));
    }

    #[test]
    fn test_same_file_missing() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.nes");
        fs::write(&a, "a").unwrap();

        assert!(!is_same_file(&a, &dir.path().join("missing.nes")));
        assert!(!is_same_file(
            &dir.path().join("missing.nes"),
            &dir.path().join("missing.nes")
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_same_file_through_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("roms");
        let link = dir.path().join("link");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("a.nes"), "a").unwrap();
        symlink(&target, &link).unwrap();

        assert!(is_same_file(&target.join("a.nes"), &link.join("a.nes")));
    }

    #[cfg(unix)]
    #[test]
    fn test_canonicalize_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");

        fs::write(&target, "test").unwrap();
        symlink(&target, &link).unwrap();

        let canonical = canonicalize(&link).unwrap();
        assert_eq!(canonical, fs::canonicalize(&target).unwrap());
    }
}
