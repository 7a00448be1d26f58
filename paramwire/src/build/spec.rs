//! Configuration records read from document sections without instantiating
//! anything.

use serde::Serialize;

use crate::apply::{DeclaredParam, declared_params};
use crate::document::{CLASS_ATTRIBUTE, Element};
use crate::{WireError, WireResult};

/// Everything needed to build one component from its section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    /// Tag of the section.
    pub tag: String,
    /// Class identifier from the section's `class` attribute.
    pub class: String,
    /// Classified parameters, in document order.
    pub params: Vec<DeclaredParam>,
}

impl ComponentSpec {
    /// Reads `section`, skipping any parameter named `exclude`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramwire::{ComponentSpec, ConfigDocument};
    ///
    /// let doc = ConfigDocument::parse(
    ///     r#"<properties><fetcher class="demo.FileFetcher">
    ///          <params><basePath>/srv</basePath></params>
    ///        </fetcher></properties>"#,
    /// )?;
    /// let spec = ComponentSpec::read(doc.unique_section("fetcher")?, None)?;
    /// assert_eq!(spec.class, "demo.FileFetcher");
    /// assert_eq!(spec.params.len(), 1);
    /// # Ok::<(), paramwire::WireError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`WireError::MissingTypeIdentifier`] when the section has no
    /// non-empty `class` attribute, and [`WireError::MalformedMapEntry`]
    /// from parameter classification.
    pub fn read(section: &Element, exclude: Option<&str>) -> WireResult<Self> {
        Ok(Self {
            tag: section.name().to_owned(),
            class: type_identifier(section)?.to_owned(),
            params: declared_params(section, exclude)?,
        })
    }
}

/// Returns the trimmed `class` attribute of `section`.
pub(super) fn type_identifier(section: &Element) -> WireResult<&str> {
    section
        .attribute(CLASS_ATTRIBUTE)
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .ok_or_else(|| WireError::MissingTypeIdentifier {
            tag: section.name().to_owned(),
        })
}

/// A composite section together with the child sections it wraps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompositeSpec {
    /// The composite's own section, without the child parameter.
    pub composite: ComponentSpec,
    /// Each child section, in document order.
    pub children: Vec<ComponentSpec>,
}

impl CompositeSpec {
    /// Reads `section` and every direct child named `child_tag`.
    ///
    /// # Errors
    ///
    /// Propagates [`ComponentSpec::read`] failures for the composite and
    /// each child.
    pub fn read(section: &Element, child_tag: &str) -> WireResult<Self> {
        let composite = ComponentSpec::read(section, Some(child_tag))?;
        let children = section
            .children_named(child_tag)
            .map(|child| ComponentSpec::read(child, None))
            .collect::<WireResult<Vec<_>>>()?;
        Ok(Self {
            composite,
            children,
        })
    }
}
