//! In-memory XML element tree.

/// One XML element: name, attributes, text content and child elements.
///
/// Text is the concatenation of all character data directly inside the
/// element, with surrounding whitespace trimmed by the reader.
///
/// # Examples
///
/// ```
/// use gamelist::document::Element;
///
/// let mut game = Element::new("game");
/// game.append(Element::with_text("name", "Custom A"));
/// game.prepend(Element::with_text("path", "/roms/nes/a.nes"));
///
/// assert_eq!(game.child_text("path"), Some("/roms/nes/a.nes"));
/// assert_eq!(game.children[1].name, "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Tag name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    /// Character data, if any.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an element holding only text.
    #[must_use]
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// The text content, or `""` when there is none.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// First child with the given tag name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Text of the first child with the given tag name.
    ///
    /// A child that exists but has no text yields `Some("")`.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }

    /// All children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Appends a child element.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Inserts a child element before all others.
    pub fn prepend(&mut self, child: Element) {
        self.children.insert(0, child);
    }

    /// Appends character data to this element's text.
    pub(crate) fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Returns `true` when the element has neither text nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text().is_empty()
    }
}
