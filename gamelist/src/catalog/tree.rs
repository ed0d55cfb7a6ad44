//! The catalog arena and lookup-or-create.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::{is_contained_and_relative, Containment};

use super::entry::{Entry, EntryId, EntryKind};

/// How [`Catalog::find_or_create`] names intermediate folders it creates.
///
/// # Examples
///
/// ```
/// use gamelist::catalog::FolderPathRule;
/// use std::path::{Path, PathBuf};
///
/// let parent = Path::new("/roms/nes");
/// assert_eq!(
///     FolderPathRule::ParentPath.folder_path(parent, "hacks".as_ref()),
///     PathBuf::from("/roms/nes/hacks")
/// );
/// assert_eq!(
///     FolderPathRule::ParentStem.folder_path(parent, "hacks".as_ref()),
///     PathBuf::from("nes/hacks")
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FolderPathRule {
    /// The parent's full path joined with the folder name.
    ///
    /// This is the default. Stem-joined paths are relative and never name an
    /// existing directory, so folder entries built with them cannot be
    /// matched against `<folder>` elements or checked on disk. Gamelists
    /// that rely on the stem form select [`FolderPathRule::ParentStem`]
    /// through `intermediate_folder_paths` or `GAMELIST_FOLDER_PATHS`.
    #[default]
    ParentPath,
    /// The parent's file stem joined with the folder name. This yields a
    /// relative path such as `nes/hacks`; it matches gamelists written by
    /// tools that name folders this way.
    ParentStem,
}

impl FolderPathRule {
    /// Path of a new folder named `name` under a folder at `parent`.
    #[must_use]
    pub fn folder_path(self, parent: &Path, name: &OsStr) -> PathBuf {
        match self {
            Self::ParentPath => parent.join(name),
            Self::ParentStem => parent
                .file_stem()
                .map(PathBuf::from)
                .unwrap_or_default()
                .join(name),
        }
    }

    /// Parses `parent-path` or `parent-stem`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "parent-path" => Some(Self::ParentPath),
            "parent-stem" => Some(Self::ParentStem),
            _ => None,
        }
    }
}

/// Which kinds of entries a traversal yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    /// Games only.
    Games,
    /// Folders only.
    Folders,
    /// Games and folders.
    All,
}

impl KindFilter {
    /// Returns `true` if entries of `kind` pass the filter.
    #[must_use]
    pub fn matches(self, kind: EntryKind) -> bool {
        match self {
            Self::Games => kind == EntryKind::Game,
            Self::Folders => kind == EntryKind::Folder,
            Self::All => true,
        }
    }
}

/// An ordered tree of entries mirroring a system's root directory.
///
/// Entries live in one arena; parents and children refer to each other by
/// [`EntryId`]. The root is a folder at the system root path and is never
/// part of traversals.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Creates a catalog holding only the root folder.
    #[must_use]
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            entries: vec![Entry::new(EntryKind::Folder, root_path.into())],
        }
    }

    /// Id of the root folder.
    #[must_use]
    pub const fn root(&self) -> EntryId {
        EntryId(0)
    }

    /// Path of the root folder.
    #[must_use]
    pub fn root_path(&self) -> &Path {
        self.entries[0].path()
    }

    /// Entry by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another catalog and is out of range.
    #[must_use]
    pub fn get(&self, id: EntryId) -> &Entry {
        &self.entries[id.0]
    }

    /// Mutable entry by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another catalog and is out of range.
    pub fn get_mut(&mut self, id: EntryId) -> &mut Entry {
        &mut self.entries[id.0]
    }

    /// Number of entries, not counting the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns `true` when only the root exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Children of `id` in insertion order.
    #[must_use]
    pub fn children(&self, id: EntryId) -> &[EntryId] {
        self.get(id).children()
    }

    /// Parent of `id`; `None` for the root.
    #[must_use]
    pub fn parent(&self, id: EntryId) -> Option<EntryId> {
        self.get(id).parent()
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn ancestors(&self, id: EntryId) -> impl Iterator<Item = EntryId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }

    /// Child of `parent` whose path ends in `name`.
    #[must_use]
    pub fn find_child_by_name(&self, parent: EntryId, name: &OsStr) -> Option<EntryId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|&child| self.get(child).file_name() == Some(name))
    }

    /// Inserts `entry` as the last child of `parent`.
    pub(crate) fn add_child(&mut self, parent: EntryId, mut entry: Entry) -> EntryId {
        debug_assert!(self.get(parent).is_folder(), "only folders have children");
        let id = EntryId(self.entries.len());
        entry.parent = Some(parent);
        self.entries.push(entry);
        self.entries[parent.0].children.push(id);
        id
    }

    /// Pre-order traversal below `id` (excluding `id` itself), yielding the
    /// entries that pass `filter`. Children of filtered-out folders are still
    /// visited.
    #[must_use]
    pub fn descendants(&self, id: EntryId, filter: KindFilter) -> Vec<EntryId> {
        let mut out = Vec::new();
        self.collect_descendants(id, filter, &mut out);
        out
    }

    fn collect_descendants(&self, id: EntryId, filter: KindFilter, out: &mut Vec<EntryId>) {
        for &child in self.children(id) {
            if filter.matches(self.get(child).kind()) {
                out.push(child);
            }
            self.collect_descendants(child, filter, out);
        }
    }

    /// Find the entry for `path`, creating it and any missing parent folders
    /// when `kind` is [`EntryKind::Game`].
    ///
    /// `path` must exist and lie inside the root. The relative path is walked
    /// one component per tree level, matching children by file name. Folder
    /// lookups never create anything: a folder entry only exists as the
    /// ancestor of some game.
    ///
    /// # Errors
    ///
    /// - `PathNotFound` and friends if `path` or the root cannot be
    ///   canonicalized.
    /// - `OutsideRoot` if `path` is not inside the root.
    /// - `Structure` if `path` is the root itself, a folder lookup has no
    ///   existing match, or a game stands where a folder is needed.
    pub fn find_or_create(
        &mut self,
        path: &Path,
        kind: EntryKind,
        rule: FolderPathRule,
    ) -> Result<EntryId> {
        let root_path = self.root_path().to_path_buf();
        let relative = match is_contained_and_relative(path, &root_path)? {
            Containment::Inside(relative) => relative,
            Containment::Outside(_) => {
                log::error!(
                    "File path \"{}\" is outside system path \"{}\"",
                    path.display(),
                    root_path.display()
                );
                return Err(Error::OutsideRoot {
                    path: path.to_path_buf(),
                    root: root_path,
                });
            }
        };

        let components: Vec<&OsStr> = relative.iter().collect();
        let Some((last, intermediate)) = components.split_last() else {
            return Err(Error::Structure {
                path: path.to_path_buf(),
                reason: "path is the system root itself".to_string(),
            });
        };

        let mut node = self.root();
        for &component in intermediate {
            node = match self.find_child_by_name(node, component) {
                Some(child) if self.get(child).is_folder() => child,
                Some(_) => {
                    return Err(Error::Structure {
                        path: path.to_path_buf(),
                        reason: format!(
                            "\"{}\" is a game, not a folder",
                            component.to_string_lossy()
                        ),
                    });
                }
                None if kind == EntryKind::Folder => return Err(refuse_folder(path)),
                None => {
                    let folder_path = rule.folder_path(self.get(node).path(), component);
                    log::debug!("Creating folder entry \"{}\"", folder_path.display());
                    self.add_child(node, Entry::new(EntryKind::Folder, folder_path))
                }
            };
        }

        if let Some(existing) = self.find_child_by_name(node, last) {
            return Ok(existing);
        }
        if kind == EntryKind::Folder {
            return Err(refuse_folder(path));
        }
        Ok(self.add_child(node, Entry::new(kind, path.to_path_buf())))
    }
}

fn refuse_folder(path: &Path) -> Error {
    log::warn!(
        "Folder \"{}\" doesn't already exist, won't create",
        path.display()
    );
    Error::Structure {
        path: path.to_path_buf(),
        reason: "folder doesn't already exist, won't create".to_string(),
    }
}
