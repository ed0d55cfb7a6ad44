//! Operations that move data between the filesystem, the catalog and the
//! gamelist document.
//!
//! A typical session runs them in this order:
//!
//! 1. [`scan`]: register every game file under the system root
//! 2. [`load`]: attach metadata from the gamelist document
//! 3. edit metadata through the catalog
//! 4. [`save`]: reconcile the catalog with the document and write it
//!
//! # Examples
//!
//! ```no_run
//! use gamelist::config::GamelistSettings;
//! use gamelist::operations::{load, save, scan};
//! use gamelist::System;
//!
//! let mut system = System::new("nes", "/roms/nes", "/roms/nes/gamelist.xml")
//!     .with_extensions([".nes", ".zip"]);
//! scan(&mut system).unwrap();
//! load(&mut system).unwrap();
//! save(&system, &GamelistSettings::default()).unwrap();
//! ```

pub mod load;
pub mod save;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_util;

pub use load::{load, LoadSummary};
pub use save::{save, SavePlan, SaveSummary};
pub use scan::{is_game_file, scan, ScanSummary};
