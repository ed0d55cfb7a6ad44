//! The in-memory catalog of a system's games and folders.
//!
//! A [`Catalog`] is a tree rooted at the system's root directory. Every
//! non-root entry's path lies inside that directory, and folders only exist
//! as ancestors of games: looking up a folder never creates one.

mod entry;
mod tree;

pub use entry::{Entry, EntryId, EntryKind};
pub use tree::{Catalog, FolderPathRule, KindFilter};
