//! Ordered metadata of one catalog entry.

use crate::catalog::EntryKind;
use crate::document::{Element, PATH_TAG};
use crate::error::{Error, Result};

use super::decl::MetadataDecl;
use super::decls_for;

/// Ordered key/value metadata of a game or folder.
///
/// Recognized keys (see [`GAME_DECLS`](super::GAME_DECLS) and
/// [`FOLDER_DECLS`](super::FOLDER_DECLS)) always have a value, their default
/// when unset. Unrecognized keys read from a gamelist are carried along
/// untouched, after the recognized ones, in first-seen order.
///
/// # Examples
///
/// ```
/// use gamelist::catalog::EntryKind;
/// use gamelist::metadata::MetadataList;
///
/// let mut metadata = MetadataList::new(EntryKind::Game);
/// assert_eq!(metadata.get("rating"), Some("0.000000"));
/// assert!(metadata.is_default("rating"));
///
/// metadata.set("rating", "0.8");
/// assert!(!metadata.is_default("rating"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataList {
    kind: EntryKind,
    values: Vec<String>,
    extra: Vec<(String, String)>,
}

impl MetadataList {
    /// Creates metadata with every recognized key at its default.
    #[must_use]
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            values: decls_for(kind)
                .iter()
                .map(|d| d.default.to_string())
                .collect(),
            extra: Vec::new(),
        }
    }

    /// Which declaration set this metadata follows.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    fn decls(&self) -> &'static [MetadataDecl] {
        decls_for(self.kind)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.decls().iter().position(|d| d.key == key)
    }

    /// The declaration of a recognized key.
    #[must_use]
    pub fn decl(&self, key: &str) -> Option<&'static MetadataDecl> {
        self.decls().iter().find(|d| d.key == key)
    }

    /// Value of `key`; `None` only for unrecognized keys never set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.position(key) {
            Some(i) => Some(self.values[i].as_str()),
            None => self
                .extra
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// The `name` value (empty when not set explicitly).
    #[must_use]
    pub fn name(&self) -> &str {
        self.get("name").unwrap_or("")
    }

    /// Sets `key` to `value`. Unrecognized keys are kept as extra data.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(i) = self.position(key) {
            self.values[i] = value;
            return;
        }
        match self.extra.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.extra.push((key.to_string(), value)),
        }
    }

    /// Default of a recognized key.
    #[must_use]
    pub fn default_value_for(&self, key: &str) -> Option<&'static str> {
        self.decl(key).map(|d| d.default)
    }

    /// Returns `true` when a recognized key holds its default.
    ///
    /// Unrecognized keys have no default and are never "default".
    #[must_use]
    pub fn is_default(&self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => self.values[i] == self.decls()[i].default,
            None => false,
        }
    }

    /// Check `value` against the declaration of `key`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for unrecognized keys and malformed values.
    pub fn validate(&self, key: &str, value: &str) -> Result<()> {
        match self.decl(key) {
            Some(decl) => decl.validate(value),
            None => Err(Error::Validation {
                field: key.to_string(),
                message: format!("not a recognized {} metadata key", self.kind.tag()),
            }),
        }
    }

    /// All key/value pairs in canonical order: recognized keys in declaration
    /// order, then extra keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls()
            .iter()
            .zip(&self.values)
            .map(|(d, v)| (d.key, v.as_str()))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Builds metadata from the children of a `<game>` or `<folder>` element.
    ///
    /// The `path` child is not metadata and is skipped. When a key appears
    /// more than once the last occurrence wins.
    #[must_use]
    pub fn parse_from(element: &Element, kind: EntryKind) -> Self {
        let mut metadata = Self::new(kind);
        for child in &element.children {
            if child.name == PATH_TAG {
                continue;
            }
            metadata.set(&child.name, child.text());
        }
        metadata
    }

    /// Appends one child element per key in canonical order.
    ///
    /// With `ignore_defaults`, recognized keys holding their default value
    /// are skipped.
    pub fn append_to(&self, element: &mut Element, ignore_defaults: bool) {
        for (i, (key, value)) in self.iter().enumerate() {
            let is_default = self
                .decls()
                .get(i)
                .is_some_and(|decl| decl.default == value);
            if ignore_defaults && is_default {
                continue;
            }
            element.append(Element::with_text(key, value));
        }
    }
}
