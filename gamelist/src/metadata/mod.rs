//! Metadata model for catalog entries.
//!
//! Games and folders recognize different sets of keys, each with a default
//! value that stands for "unset". Defaults are never written to gamelists,
//! which keeps them minimal and diff-friendly.
//!
//! The default `name` of an entry is derived from its path by
//! [`default_name_for`]; an entry whose only metadata is that name carries no
//! information beyond the filesystem and is left out of the gamelist.

mod decl;
mod list;

use std::path::Path;

use crate::catalog::EntryKind;

pub use decl::{MetadataDecl, MetadataType, DATE_TIME_FORMAT, FOLDER_DECLS, GAME_DECLS};
pub use list::MetadataList;

/// Declarations recognized for an entry kind.
#[must_use]
pub fn decls_for(kind: EntryKind) -> &'static [MetadataDecl] {
    match kind {
        EntryKind::Game => GAME_DECLS,
        EntryKind::Folder => FOLDER_DECLS,
    }
}

/// Derive the display name of an entry from its path.
///
/// Takes the file stem, drops parenthesized and bracketed tags such as
/// region or dump flags, and collapses whitespace. Falls back to the trimmed
/// stem when nothing else is left.
///
/// # Examples
///
/// ```
/// use gamelist::metadata::default_name_for;
/// use std::path::Path;
///
/// assert_eq!(default_name_for(Path::new("/roms/nes/Super Mario (USA) [!].nes")), "Super Mario");
/// assert_eq!(default_name_for(Path::new("/roms/nes/a.nes")), "a");
/// assert_eq!(default_name_for(Path::new("/roms/nes/(Hack).nes")), "(Hack)");
/// ```
#[must_use]
pub fn default_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let cleaned = strip_tags(&stem);
    if cleaned.is_empty() {
        stem.trim().to_string()
    } else {
        cleaned
    }
}

fn strip_tags(stem: &str) -> String {
    let mut kept = String::with_capacity(stem.len());
    let mut depth = 0usize;
    for c in stem.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' if depth > 0 => depth -= 1,
            _ if depth == 0 => kept.push(c),
            _ => {}
        }
    }
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
