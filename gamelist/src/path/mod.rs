//! Path handling for catalog entries.
//!
//! # Key Concepts
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks and resolves `.` and `..` to get the
//! "real" path on the filesystem. It requires the path to exist, which is why
//! containment checks fail with [`Error::PathNotFound`](crate::Error) for
//! missing files instead of guessing.
//!
//! ## Containment
//!
//! A path is contained in a root when its canonical form has the canonical
//! root as a component-wise prefix. The remainder is the relative path used
//! to walk the catalog tree one level per component.
//!
//! ## Generic form
//!
//! Paths stored in gamelist documents are written with `/` separators on
//! every platform.
//!
//! # Examples
//!
//! ```no_run
//! use gamelist::path::is_contained_and_relative;
//! use std::path::Path;
//!
//! let result = is_contained_and_relative(
//!     Path::new("/home/pi/roms/nes/foo/bar.nes"),
//!     Path::new("/home/pi/roms/nes"),
//! )
//! .unwrap();
//! assert_eq!(result.path(), Path::new("foo/bar.nes"));
//! ```

pub mod canonicalize;
mod containment;
pub mod normalize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use canonicalize::is_same_file;
pub use containment::{is_contained_and_relative, Containment};
pub use normalize::to_generic_string;
