//! Element tree produced by the document loader.

use indexmap::IndexMap;

/// An XML element reduced to what the builders inspect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Content>,
}

/// A child of an [`Element`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Nested element.
    Element(Element),
    /// Character data, with entities already resolved.
    Text(String),
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Adds or replaces an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(Content::Element(child));
        self
    }

    /// Appends character data.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text.into());
        self
    }

    pub(super) fn push_child(&mut self, child: Self) {
        self.children.push(Content::Element(child));
    }

    /// Merges adjacent runs so `a&amp;b` stays one text node.
    pub(super) fn push_text(&mut self, text: String) {
        if let Some(Content::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Content::Text(text));
        }
    }

    pub(super) fn insert_attribute(&mut self, name: String, value: String) {
        self.attributes.insert(name, value);
    }

    /// Local name of the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up an attribute by local name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in document order.
    #[must_use]
    pub const fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// All children, elements and text interleaved.
    #[must_use]
    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Child elements in document order, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            Content::Element(element) => Some(element),
            Content::Text(_) => None,
        })
    }

    /// Child elements named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Self> {
        self.elements().filter(move |element| element.name == name)
    }

    /// First child element named `name`.
    #[must_use]
    pub fn first_child_named(&self, name: &str) -> Option<&Self> {
        self.elements().find(|element| element.name == name)
    }

    /// Returns `true` when at least one child is an element.
    #[must_use]
    pub fn has_element_children(&self) -> bool {
        self.elements().next().is_some()
    }

    /// Concatenated character data of this element and all descendants.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Content::Text(text) => out.push_str(text),
                Content::Element(element) => element.collect_text(out),
            }
        }
    }
}
