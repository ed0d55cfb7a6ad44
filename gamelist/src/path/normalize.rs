//! Lexical path normalization.
//!
//! These helpers never touch the filesystem beyond looking up the home
//! directory: they expand `~`, anchor relative paths to a base directory,
//! drop `.` and resolve `..` textually, and render paths in the
//! slash-separated form stored in gamelist documents.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax
///
/// # Examples
///
/// ```
/// use gamelist::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/roms")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("roms"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path without following
/// symlinks.
///
/// # Errors
///
/// Returns an error if `..` would escape the root directory.
///
/// # Examples
///
/// ```
/// use gamelist::path::normalize::resolve_components;
/// use std::path::PathBuf;
///
/// let resolved = resolve_components("/roms/./nes/../snes".as_ref()).unwrap();
/// assert_eq!(resolved, PathBuf::from("/roms/snes"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                result.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = result.parent().is_none();
                if at_root || !result.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            }
        }
    }

    Ok(result)
}

/// Normalize a configured path against a base directory.
///
/// Expands `~`, joins relative paths onto `base`, and resolves `.`/`..`
/// lexically. Used for system roots and gamelist locations read from
/// configuration files, which are relative to the file that names them.
///
/// # Errors
///
/// Returns an error if tilde expansion or component resolution fails, or if
/// the result is still not absolute.
pub fn normalize_against(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };

    let resolved = resolve_components(&absolute)?;
    if !resolved.is_absolute() {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "Path must be absolute after normalization".to_string(),
        });
    }
    Ok(resolved)
}

/// Anchor a path found inside a document (or given on a command line) to
/// `base` without interpreting it.
///
/// Relative paths are joined onto `base` with leading `.` components
/// dropped; absolute paths are returned as they are. `..` and `~` are left
/// untouched, so symlinks along the path are still honored when the result
/// is canonicalized.
///
/// # Examples
///
/// ```
/// use gamelist::path::normalize::anchor_to;
/// use std::path::Path;
///
/// let base = Path::new("/roms/nes");
/// assert_eq!(anchor_to(Path::new("./sub/b.nes"), base), Path::new("/roms/nes/sub/b.nes"));
/// assert_eq!(
///     anchor_to(Path::new("/roms/nes/link/../a.nes"), base).as_os_str(),
///     "/roms/nes/link/../a.nes"
/// );
/// ```
#[must_use]
pub fn anchor_to(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let relative: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    base.join(relative)
}

/// Render a path in generic form: components separated by `/` regardless
/// of platform.
///
/// # Examples
///
/// ```
/// use gamelist::path::normalize::to_generic_string;
/// use std::path::Path;
///
/// assert_eq!(to_generic_string(Path::new("/roms/nes/a.nes")), "/roms/nes/a.nes");
/// ```
#[must_use]
pub fn to_generic_string(path: &Path) -> String {
    let display = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        display.into_owned()
    } else {
        display.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
