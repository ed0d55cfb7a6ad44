#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # gamelist
//!
//! A library for keeping an in-memory catalog of game files in sync with
//! `gamelist.xml` sidecar documents.
//!
//! A [`System`] is a root directory of games. Its [`Catalog`] mirrors the
//! directory tree: games are leaves, folders exist only to reach them. The
//! gamelist document records the metadata (titles, descriptions, ratings)
//! that cannot be derived from the filesystem.
//!
//! ## Core Types
//!
//! - [`System`]: a configured root directory with its catalog
//! - [`Catalog`], [`Entry`] and [`EntryKind`]: the catalog tree
//! - [`MetadataList`]: per-entry metadata with defaults
//! - [`Document`]: the parsed gamelist XML
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use gamelist::path::is_contained_and_relative;
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let game = dir.path().join("foo").join("bar.nes");
//! fs::create_dir_all(game.parent().unwrap()).unwrap();
//! fs::write(&game, "rom").unwrap();
//!
//! let containment = is_contained_and_relative(&game, dir.path()).unwrap();
//! assert!(containment.is_contained());
//! assert_eq!(containment.path(), std::path::Path::new("foo/bar.nes"));
//! ```

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod operations;
pub mod path;
pub mod system;

// Re-export key types at crate root for convenience
pub use catalog::{Catalog, Entry, EntryId, EntryKind, FolderPathRule, KindFilter};
pub use config::{Config, GamelistSettings};
pub use document::{Document, Element};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use metadata::MetadataList;
pub use operations::{load, save, scan, LoadSummary, SavePlan, SaveSummary, ScanSummary};
pub use path::{is_contained_and_relative, Containment};
pub use system::System;
