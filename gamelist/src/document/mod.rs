//! Gamelist XML documents.
//!
//! A document is parsed once into an immutable [`Element`] tree and written
//! back in one pass. Reconciliation never edits the tree while walking it;
//! see [`crate::operations::save`].

mod element;
mod reader;
mod writer;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub use element::Element;

/// Tag of the root element of every gamelist.
pub const GAMELIST_ROOT: &str = "gameList";

/// Tag of the child holding an entry's filesystem path.
pub const PATH_TAG: &str = "path";

/// A parsed XML document.
///
/// # Examples
///
/// ```
/// use gamelist::document::Document;
/// use std::path::Path;
///
/// let xml = "<gameList><game><path>/roms/nes/a.nes</path></game></gameList>";
/// let doc = Document::parse(xml, Path::new("gamelist.xml")).unwrap();
/// assert!(doc.is_gamelist());
/// assert_eq!(doc.root().children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Creates a document with an empty `<gameList>` root.
    #[must_use]
    pub fn new_gamelist() -> Self {
        Self::from_root(Element::new(GAMELIST_ROOT))
    }

    /// Wraps an existing element as the document root.
    #[must_use]
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// Parses a document from a string. `source` is used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `DocumentParse` if the XML is malformed or has no single root
    /// element.
    pub fn parse(xml: &str, source: &Path) -> Result<Self> {
        reader::parse_root(xml, source).map(Self::from_root)
    }

    /// Reads and parses a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, `DocumentParse` if
    /// it is not UTF-8 or is malformed.
    pub fn read_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let xml = String::from_utf8(bytes).map_err(|e| Error::DocumentParse {
            path: path.to_path_buf(),
            reason: format!("document is not valid UTF-8: {e}"),
        })?;
        Self::parse(&xml, path)
    }

    /// The root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Mutable access to the root element.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Consumes the document and returns its root.
    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Returns `true` when the root element is `<gameList>`.
    #[must_use]
    pub fn is_gamelist(&self) -> bool {
        self.root.name == GAMELIST_ROOT
    }

    /// Fails with `DocumentParse` unless the root element is `<gameList>`.
    ///
    /// # Errors
    ///
    /// See above; `source` labels the error.
    pub fn require_gamelist(&self, source: &Path) -> Result<()> {
        if self.is_gamelist() {
            return Ok(());
        }
        Err(Error::DocumentParse {
            path: source.to_path_buf(),
            reason: format!(
                "could not find <{GAMELIST_ROOT}> root element (found <{}>)",
                self.root.name
            ),
        })
    }

    /// Serializes the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        writer::write_document(&self.root)
    }

    /// Serializes the document to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn to_xml_string(&self) -> Result<String> {
        let bytes = self.to_bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Serializes the document and writes it to `path`, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}
