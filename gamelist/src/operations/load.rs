//! Loading a gamelist document into a system's catalog.

use std::path::Path;

use crate::catalog::EntryKind;
use crate::document::{Document, Element, PATH_TAG};
use crate::error::Result;
use crate::metadata::MetadataList;
use crate::path::normalize::anchor_to;
use crate::system::System;

/// Result of a load operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Elements whose metadata was attached to an entry.
    pub loaded: usize,
    /// Elements naming files that no longer exist.
    pub stale: usize,
    /// Elements that could not be placed in the catalog.
    pub rejected: usize,
}

impl LoadSummary {
    /// Total number of `game` and `folder` elements seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.loaded + self.stale + self.rejected
    }
}

/// Reads the system's gamelist and attaches its metadata to catalog entries,
/// creating game entries (and their folders) as needed.
///
/// All `game` elements are processed before any `folder` element, so folder
/// metadata lands on folders that games have already created. Folders never
/// get created from `folder` elements alone.
///
/// A missing document is not an error. Problems with single elements are
/// logged and counted; they never abort the load.
///
/// # Errors
///
/// Returns `DocumentParse` if the document is malformed or its root is not
/// `<gameList>`. The catalog is not modified in that case.
///
/// # Examples
///
/// ```no_run
/// use gamelist::operations::load;
/// use gamelist::System;
///
/// let mut system = System::new("nes", "/roms/nes", "/roms/nes/gamelist.xml");
/// let summary = load(&mut system).unwrap();
/// println!("{} entries loaded", summary.loaded);
/// ```
pub fn load(system: &mut System) -> Result<LoadSummary> {
    let gamelist_path = system.gamelist_path().to_path_buf();
    if !gamelist_path.exists() {
        log::debug!(
            "No gamelist at {}, nothing to load",
            gamelist_path.display()
        );
        return Ok(LoadSummary::default());
    }

    log::info!("Parsing gamelist {}", gamelist_path.display());
    let document = Document::read_file(&gamelist_path)?;
    document.require_gamelist(&gamelist_path)?;

    let mut summary = LoadSummary::default();
    for kind in [EntryKind::Game, EntryKind::Folder] {
        for element in document.root().children_named(kind.tag()) {
            load_element(system, element, kind, &gamelist_path, &mut summary);
        }
    }

    log::debug!(
        "Loaded {} entries from {} ({} stale, {} rejected)",
        summary.loaded,
        gamelist_path.display(),
        summary.stale,
        summary.rejected
    );
    Ok(summary)
}

fn load_element(
    system: &mut System,
    element: &Element,
    kind: EntryKind,
    source: &Path,
    summary: &mut LoadSummary,
) {
    let Some(stored) = element.child_text(PATH_TAG) else {
        log::warn!(
            "<{}> without a <{PATH_TAG}> in {}, skipping",
            kind.tag(),
            source.display()
        );
        summary.rejected += 1;
        return;
    };

    let path = anchor_to(Path::new(stored), system.root_path());

    if !path.exists() {
        log::warn!(
            "File \"{}\" does not exist, ignoring its gamelist entry",
            path.display()
        );
        summary.stale += 1;
        return;
    }

    let id = match system.find_or_create(&path, kind) {
        Ok(id) => id,
        Err(e) => {
            log::error!(
                "Error finding/creating {} for \"{}\": {e}",
                kind,
                path.display()
            );
            summary.rejected += 1;
            return;
        }
    };

    let entry = system.catalog_mut().get_mut(id);
    if entry.kind() != kind {
        log::warn!(
            "<{}> element for \"{}\" names a {}",
            kind.tag(),
            path.display(),
            entry.kind()
        );
    }

    let previous_name = entry.metadata().name().to_string();
    let mut metadata = MetadataList::parse_from(element, entry.kind());
    if metadata.name().is_empty() {
        metadata.set("name", previous_name);
    }
    entry.set_metadata(metadata);
    summary.loaded += 1;
}
