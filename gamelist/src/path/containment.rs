//! Root containment checks.
//!
//! Both the candidate path and the root are canonicalized before they are
//! compared, so a game reached through a symlinked root is still inside it
//! and a path escaping through `..` is still outside.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

use super::canonicalize::canonicalize;

/// Outcome of checking a path against a root.
///
/// # Examples
///
/// ```
/// use gamelist::path::Containment;
/// use std::path::{Path, PathBuf};
///
/// let inside = Containment::Inside(PathBuf::from("foo/bar.nes"));
/// assert!(inside.is_contained());
/// assert_eq!(inside.path(), Path::new("foo/bar.nes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Containment {
    /// The path lies inside the root; carries the path relative to it.
    ///
    /// The relative path is empty when the path is the root itself.
    Inside(PathBuf),

    /// The path lies outside the root; carries the canonical path.
    Outside(PathBuf),
}

impl Containment {
    /// Returns `true` for [`Containment::Inside`].
    #[must_use]
    pub fn is_contained(&self) -> bool {
        matches!(self, Self::Inside(_))
    }

    /// The relative path (inside) or the canonical path (outside).
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Inside(p) | Self::Outside(p) => p,
        }
    }

    /// Consumes the result and returns the relative path, if contained.
    #[must_use]
    pub fn into_relative(self) -> Option<PathBuf> {
        match self {
            Self::Inside(p) => Some(p),
            Self::Outside(_) => None,
        }
    }
}

/// Decide whether `path` lies inside `root` and compute the relative path.
///
/// # Errors
///
/// Returns `PathNotFound` (or another resolution error) if either path
/// cannot be canonicalized; canonicalization requires existence.
///
/// # Examples
///
/// ```no_run
/// use gamelist::path::is_contained_and_relative;
/// use std::path::Path;
///
/// let result = is_contained_and_relative(
///     Path::new("/home/pi/roms/nes/foo/bar.nes"),
///     Path::new("/home/pi/roms/nes/"),
/// )
/// .unwrap();
/// assert!(result.is_contained());
/// assert_eq!(result.path(), Path::new("foo/bar.nes"));
/// ```
pub fn is_contained_and_relative(path: &Path, root: &Path) -> Result<Containment> {
    let path = canonicalize(path)?;
    let root = canonicalize(root)?;
    Ok(relative_to_canonical_root(path, &root))
}

/// Containment check on paths that are already canonical.
pub(crate) fn relative_to_canonical_root(path: PathBuf, root: &Path) -> Containment {
    if root_components(&path) != root_components(root) {
        return Containment::Outside(path);
    }

    let mut path_iter = path.components();
    for root_component in root.components() {
        match path_iter.next() {
            Some(component) if component == root_component => {}
            _ => return Containment::Outside(path),
        }
    }

    let relative: PathBuf = path_iter
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    Containment::Inside(relative)
}

/// The drive/volume prefix and root directory, if any.
fn root_components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn test_lexical_example() {
        let result = relative_to_canonical_root(
            PathBuf::from("/home/pi/roms/nes/foo/bar.nes"),
            Path::new("/home/pi/roms/nes/"),
        );
        assert_eq!(result, Containment::Inside(PathBuf::from("foo/bar.nes")));
    }

    #[cfg(unix)]
    #[test]
    fn test_lexical_sibling_prefix_is_outside() {
        // "nes2" shares a string prefix with "nes" but not a component prefix
        let result = relative_to_canonical_root(
            PathBuf::from("/roms/nes2/a.nes"),
            Path::new("/roms/nes"),
        );
        assert_eq!(result, Containment::Outside(PathBuf::from("/roms/nes2/a.nes")));
    }

    #[cfg(unix)]
    #[test]
    fn test_lexical_root_itself() {
        let result = relative_to_canonical_root(PathBuf::from("/roms/nes"), Path::new("/roms/nes"));
        assert_eq!(result, Containment::Inside(PathBuf::new()));
    }

    #[cfg(unix)]
    #[test]
    fn test_lexical_path_shorter_than_root() {
        let result = relative_to_canonical_root(PathBuf::from("/roms"), Path::new("/roms/nes"));
        assert!(!result.is_contained());
    }

    #[test]
    fn test_contained_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nes");
        fs::create_dir_all(root.join("foo")).unwrap();
        fs::write(root.join("foo").join("bar.nes"), "rom").unwrap();

        let result = is_contained_and_relative(&root.join("foo").join("bar.nes"), &root).unwrap();
        assert!(result.is_contained());
        assert_eq!(result.path(), Path::new("foo").join("bar.nes"));
    }

    #[test]
    fn test_escape_through_parent_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nes");
        let other = dir.path().join("snes");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("a.sfc"), "rom").unwrap();

        let sneaky = root.join("..").join("snes").join("a.sfc");
        let result = is_contained_and_relative(&sneaky, &root).unwrap();
        assert!(!result.is_contained());
        assert_eq!(
            result.path(),
            fs::canonicalize(other.join("a.sfc")).unwrap()
        );
    }

    #[test]
    fn test_missing_path_is_resolution_error() {
        let dir = tempdir().unwrap();
        let result = is_contained_and_relative(&dir.path().join("missing.nes"), dir.path());
        assert!(matches!(result, Err(Error::PathNotFound { .. })));
    }

    #[test]
    fn test_missing_root_is_resolution_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.nes"), "rom").unwrap();
        let result = is_contained_and_relative(&dir.path().join("a.nes"), &dir.path().join("nope"));
        assert!(matches!(result, Err(Error::PathNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let real = dir.path().join("real");
        let link = dir.path().join("link");
        fs::create_dir_all(real.join("sub")).unwrap();
        fs::write(real.join("sub").join("a.nes"), "rom").unwrap();
        symlink(&real, &link).unwrap();

        // Path reached through the real directory, root given through the link
        let result = is_contained_and_relative(&real.join("sub").join("a.nes"), &link).unwrap();
        assert_eq!(result, Containment::Inside(PathBuf::from("sub/a.nes")));

        // And the other way round
        let result = is_contained_and_relative(&link.join("sub").join("a.nes"), &real).unwrap();
        assert_eq!(result.into_relative(), Some(PathBuf::from("sub/a.nes")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_pointing_outside() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let root = dir.path().join("nes");
        let outside = dir.path().join("outside.nes");
        fs::create_dir_all(&root).unwrap();
        fs::write(&outside, "rom").unwrap();
        symlink(&outside, root.join("inside.nes")).unwrap();

        let result = is_contained_and_relative(&root.join("inside.nes"), &root).unwrap();
        assert!(!result.is_contained());
    }
}
