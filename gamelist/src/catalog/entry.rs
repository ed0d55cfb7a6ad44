//! Catalog entries.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::metadata::{default_name_for, MetadataList};

/// Index of an entry inside its [`Catalog`](super::Catalog).
///
/// Ids are only meaningful for the catalog that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(super) usize);

impl EntryId {
    /// Position of the entry in the catalog arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Whether an entry is a game file or a folder.
///
/// # Examples
///
/// ```
/// use gamelist::catalog::EntryKind;
///
/// assert_eq!(EntryKind::Game.tag(), "game");
/// assert_eq!(EntryKind::from_tag("folder"), Some(EntryKind::Folder));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A launchable game file.
    Game,
    /// A directory containing games.
    Folder,
}

impl EntryKind {
    /// Tag name used for this kind in gamelist documents.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Folder => "folder",
        }
    }

    /// Parses a gamelist tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "game" => Some(Self::Game),
            "folder" => Some(Self::Folder),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One node of the catalog tree: a game file or a folder.
#[derive(Debug, Clone)]
pub struct Entry {
    kind: EntryKind,
    path: PathBuf,
    metadata: MetadataList,
    pub(super) children: Vec<EntryId>,
    pub(super) parent: Option<EntryId>,
}

impl Entry {
    /// Creates a detached entry whose `name` is the default derived from
    /// `path`.
    #[must_use]
    pub fn new(kind: EntryKind, path: PathBuf) -> Self {
        let mut metadata = MetadataList::new(kind);
        metadata.set("name", default_name_for(&path));
        Self {
            kind,
            path,
            metadata,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Game or folder.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns `true` for folders.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// Location of the entry as it was registered.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final component of the path, used to match siblings.
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// The name derived from the path.
    #[must_use]
    pub fn default_name(&self) -> String {
        default_name_for(&self.path)
    }

    /// The entry's metadata.
    #[must_use]
    pub fn metadata(&self) -> &MetadataList {
        &self.metadata
    }

    /// Mutable access to the metadata.
    pub fn metadata_mut(&mut self) -> &mut MetadataList {
        &mut self.metadata
    }

    /// Replaces the metadata wholesale.
    pub fn set_metadata(&mut self, metadata: MetadataList) {
        self.metadata = metadata;
    }

    /// Child ids in insertion order (always empty for games).
    #[must_use]
    pub fn children(&self) -> &[EntryId] {
        &self.children
    }

    /// Parent id; `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }
}
