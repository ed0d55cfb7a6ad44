//! Error types for the gamelist library.
//!
//! This module provides the error hierarchy for catalog, path and document
//! operations, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a gamelist error.
///
/// # Examples
///
/// ```
/// use gamelist::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the gamelist library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist and could not be canonicalized.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A path resolved to a location outside the system root.
    #[error("path {} is outside system root {}", path.display(), root.display())]
    OutsideRoot {
        /// The offending path.
        path: PathBuf,
        /// The system root it was checked against.
        root: PathBuf,
    },

    /// The catalog tree cannot satisfy a lookup without creating folders.
    #[error("catalog structure error for {}: {reason}", path.display())]
    Structure {
        /// The path that was looked up.
        path: PathBuf,
        /// Why the lookup failed.
        reason: String,
    },

    /// The persisted gamelist document is malformed.
    #[error("error parsing gamelist {}: {reason}", path.display())]
    DocumentParse {
        /// The document path.
        path: PathBuf,
        /// A description of the problem.
        reason: String,
    },

    /// The XML reader or writer failed.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// No system with the given name is configured.
    #[error("unknown system: {name}")]
    UnknownSystem {
        /// The requested system name.
        name: String,
    },
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(err.into())
    }
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamelist::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error concerns the structure or contents of a gamelist
    /// document rather than the filesystem.
    #[must_use]
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::DocumentParse { .. } | Self::Xml(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_outside_root_error() {
        let err = Error::OutsideRoot {
            path: PathBuf::from("/elsewhere/game.nes"),
            root: PathBuf::from("/roms/nes"),
        };
        let display = format!("{err}").replace(std::path::MAIN_SEPARATOR, "/");
        assert!(display.contains("outside system root"));
        assert!(display.contains("/elsewhere/game.nes"));
        assert!(display.contains("/roms/nes"));
    }

    #[test]
    fn test_structure_error() {
        let err = Error::Structure {
            path: PathBuf::from("/roms/nes/hacks"),
            reason: "folder doesn't already exist, won't create".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("catalog structure error"));
        assert!(display.contains("won't create"));
    }

    #[test]
    fn test_document_parse_error() {
        let err = Error::DocumentParse {
            path: PathBuf::from("/roms/nes/gamelist.xml"),
            reason: "missing <gameList> root".to_string(),
        };
        assert!(err.is_document_error());
        assert!(format!("{err}").contains("<gameList>"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "rating".to_string(),
            message: "must be between 0 and 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("rating"));
    }

    #[test]
    fn test_unknown_system_error() {
        let err = Error::UnknownSystem {
            name: "snes".to_string(),
        };
        assert_eq!(format!("{err}"), "unknown system: snes");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_predicates() {
        let err = Error::PermissionDenied {
            path: PathBuf::from("/restricted"),
        };
        assert!(err.is_permission_denied());
        assert!(!err.is_document_error());

        let err = Error::PathNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        assert!(err.is_not_found());
    }
}
