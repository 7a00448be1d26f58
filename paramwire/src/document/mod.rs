//! Read-only configuration documents.
//!
//! A document is an XML tree whose root element must be named
//! [`ROOT_TAG`]. Each direct child of the root is a section describing one
//! component (or one composite of components). Element and attribute names
//! are compared by local name, so namespace prefixes are ignored.

mod helpers;
mod loader;
mod node;

use std::io::Read;

use camino::Utf8Path;

pub use node::{Content, Element};

use crate::{WireError, WireResult};

/// Required local name of the document root.
pub const ROOT_TAG: &str = "properties";

/// Local name of the section holding a component's parameters.
pub const PARAMS_TAG: &str = "params";

/// Attribute carrying a section's class identifier.
pub const CLASS_ATTRIBUTE: &str = "class";

/// A parsed properties document.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigDocument {
    root: Element,
}

impl ConfigDocument {
    /// Parses `source` and checks that the root is a [`ROOT_TAG`] element.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramwire::ConfigDocument;
    ///
    /// let doc = ConfigDocument::parse(
    ///     r#"<properties><fetcher class="demo.FileFetcher"/></properties>"#,
    /// )?;
    /// assert_eq!(doc.sections("fetcher").count(), 1);
    /// # Ok::<(), paramwire::WireError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`WireError::DocumentFormat`] when the source is not
    /// well-formed XML or the root element has the wrong name.
    pub fn parse(source: &str) -> WireResult<Self> {
        Self::from_root(loader::parse_tree(source)?)
    }

    /// Reads the whole of `reader` and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::DocumentFormat`] when the bytes are not UTF-8,
    /// cannot be read, or do not form a properties document.
    pub fn from_reader(mut reader: impl Read) -> WireResult<Self> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|err| WireError::unparseable("problem reading document source", err))?;
        Self::parse(&source)
    }

    /// Loads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Io`] when the file cannot be opened or read, and
    /// [`WireError::DocumentFormat`] when its contents are malformed.
    pub fn load(path: &Utf8Path) -> WireResult<Self> {
        let source = helpers::read_document(path).map_err(|err| WireError::io(path, err))?;
        tracing::debug!(path = %path, bytes = source.len(), "loaded configuration document");
        Self::parse(&source)
    }

    /// Wraps an already-built tree, enforcing the root tag rule.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::DocumentFormat`] when `root` is not named
    /// [`ROOT_TAG`].
    pub fn from_root(root: Element) -> WireResult<Self> {
        if root.name() != ROOT_TAG {
            return Err(WireError::document_format(format!(
                "expect {ROOT_TAG} as root node, found <{}>",
                root.name()
            )));
        }
        Ok(Self { root })
    }

    /// Returns the root element.
    #[must_use]
    pub const fn root(&self) -> &Element {
        &self.root
    }

    /// Iterates over the root's child sections named `tag`, in document
    /// order.
    pub fn sections<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Element> {
        self.root.children_named(tag)
    }

    /// Returns the only section named `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::NotFound`] when there is none and
    /// [`WireError::DuplicateDefinition`] when there is more than one.
    pub fn unique_section(&self, tag: &str) -> WireResult<&Element> {
        let mut matches = self.sections(tag);
        let first = matches.next().ok_or_else(|| WireError::not_found(tag))?;
        if matches.next().is_some() {
            return Err(WireError::duplicate(tag));
        }
        Ok(first)
    }
}
