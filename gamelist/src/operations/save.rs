//! Writing a system's catalog back to its gamelist document.
//!
//! Saving follows a plan-then-execute split: [`SavePlan::build`] reconciles
//! the catalog against the document on disk without side effects, and
//! [`SavePlan::execute`] writes the result. `sync --dry-run` stops after the
//! plan.
//!
//! ## Reconciliation
//!
//! The existing document is parsed once and never edited. Each catalog
//! entry, in pre-order, claims the first unclaimed top-level element with
//! the same tag whose `path` names the same file. Claimed elements are
//! dropped; every other original element is kept verbatim, in its original
//! place. A fresh element is then built from the entry's non-default
//! metadata and appended after the kept elements. Entries that carry
//! nothing beyond their derived name produce no element.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Entry, KindFilter};
use crate::config::GamelistSettings;
use crate::document::{Document, Element, PATH_TAG};
use crate::error::Result;
use crate::path::normalize::anchor_to;
use crate::path::{is_same_file, to_generic_string};
use crate::system::System;

/// Result of a save operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    /// Elements written from catalog entries.
    pub written: usize,
    /// Entries left out because their metadata is all defaults.
    pub elided: usize,
    /// Original elements superseded by a catalog entry.
    pub replaced: usize,
    /// Original elements kept verbatim.
    pub preserved: usize,
    /// `true` when settings prevented the save.
    pub skipped: bool,
}

impl SaveSummary {
    /// Summary of a save that did not run.
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }
}

/// A reconciled document ready to be written.
#[derive(Debug, Clone)]
pub struct SavePlan {
    path: PathBuf,
    document: Document,
    summary: SaveSummary,
    is_new: bool,
}

/// A top-level element of the original document with its stored path.
struct Candidate<'a> {
    tag: &'a str,
    stored: Option<&'a str>,
    resolved: Option<PathBuf>,
}

impl Candidate<'_> {
    fn matches(&self, tag: &str, path: &Path) -> bool {
        if self.tag != tag {
            return false;
        }
        let Some(stored) = self.stored else {
            return false;
        };
        if Path::new(stored) == path {
            return true;
        }
        self.resolved
            .as_deref()
            .is_some_and(|resolved| resolved == path || is_same_file(resolved, path))
    }
}

impl SavePlan {
    /// Reconciles the system's catalog against its gamelist document.
    ///
    /// Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `DocumentParse` if the existing document is malformed or its
    /// root is not `<gameList>`.
    pub fn build(system: &System) -> Result<Self> {
        let path = system.gamelist_path().to_path_buf();
        let is_new = !path.exists();
        let original = if is_new {
            Document::new_gamelist()
        } else {
            let document = Document::read_file(&path)?;
            document.require_gamelist(&path)?;
            document
        };

        let candidates: Vec<Candidate<'_>> = original
            .root()
            .children
            .iter()
            .map(|element| candidate(element, system.root_path(), &path))
            .collect();
        let mut claimed = vec![false; candidates.len()];

        let mut summary = SaveSummary::default();
        let mut fresh = Vec::new();
        let catalog = system.catalog();
        for id in catalog.descendants(catalog.root(), KindFilter::All) {
            let entry = catalog.get(id);
            let tag = entry.kind().tag();

            let found = candidates
                .iter()
                .zip(&claimed)
                .position(|(c, &taken)| !taken && c.matches(tag, entry.path()));
            if let Some(index) = found {
                claimed[index] = true;
                summary.replaced += 1;
            }

            match entry_element(entry) {
                Some(element) => {
                    fresh.push(element);
                    summary.written += 1;
                }
                None => summary.elided += 1,
            }
        }
        drop(candidates);

        let original_root = original.into_root();
        let mut root = Element::new(original_root.name);
        root.attributes = original_root.attributes;
        root.children = original_root
            .children
            .into_iter()
            .zip(claimed)
            .filter_map(|(element, taken)| (!taken).then_some(element))
            .collect();
        summary.preserved = root.children.len();
        root.children.extend(fresh);

        Ok(Self {
            path,
            document: Document::from_root(root),
            summary,
            is_new,
        })
    }

    /// Where the document will be written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The reconciled document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Counts describing the reconciliation.
    #[must_use]
    pub fn summary(&self) -> SaveSummary {
        self.summary
    }

    /// Returns `true` if no document existed before.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Writes the document, creating its parent directory for new ones.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory or file cannot be written.
    pub fn execute(self) -> Result<SaveSummary> {
        if self.is_new {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        log::info!(
            "Writing {} entries to {}",
            self.summary.written,
            self.path.display()
        );
        self.document.write_file(&self.path)?;
        Ok(self.summary)
    }
}

/// Saves the system's catalog to its gamelist document.
///
/// Does nothing when `settings` disable writes.
///
/// # Errors
///
/// Returns `DocumentParse` for an unusable existing document and `Io` if
/// writing fails. The catalog is never modified.
///
/// # Examples
///
/// ```no_run
/// use gamelist::config::GamelistSettings;
/// use gamelist::operations::{load, save};
/// use gamelist::System;
///
/// let mut system = System::new("nes", "/roms/nes", "/roms/nes/gamelist.xml");
/// load(&mut system).unwrap();
/// let summary = save(&system, &GamelistSettings::default()).unwrap();
/// println!("{} entries written", summary.written);
/// ```
pub fn save(system: &System, settings: &GamelistSettings) -> Result<SaveSummary> {
    if !settings.writes_enabled() {
        log::debug!("Gamelist writes disabled, not saving {}", system.name());
        return Ok(SaveSummary::skipped());
    }
    SavePlan::build(system)?.execute()
}

fn candidate<'a>(element: &'a Element, root: &Path, source: &Path) -> Candidate<'a> {
    let stored = element.child_text(PATH_TAG);
    let is_entry = element.name == "game" || element.name == "folder";
    if stored.is_none() && is_entry {
        log::warn!(
            "<{}> without a <{PATH_TAG}> in {}, keeping it as is",
            element.name,
            source.display()
        );
    }
    Candidate {
        tag: &element.name,
        stored,
        resolved: stored.map(|s| anchor_to(Path::new(s), root)),
    }
}

/// The element recording `entry`, or `None` when it would carry nothing
/// beyond the entry's path-derived name.
fn entry_element(entry: &Entry) -> Option<Element> {
    let mut element = Element::new(entry.kind().tag());
    entry.metadata().append_to(&mut element, true);

    // An element with no children at all is dropped too; loading restores
    // the derived name, so `<game><path>..</path></game>` would add nothing.
    let only_default_name = match element.children.as_slice() {
        [] => true,
        [only] => only.name == "name" && only.text() == entry.default_name(),
        _ => false,
    };
    if only_default_name {
        return None;
    }

    element.prepend(Element::with_text(PATH_TAG, to_generic_string(entry.path())));
    Some(element)
}
