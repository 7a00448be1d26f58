//! Structural classification of parameter nodes.
//!
//! The shape of a parameter is read from the element alone, never from the
//! target component:
//!
//! - no child elements: a scalar holding the node's text;
//! - at least one child carrying both a key (`from` or `key`) and a value
//!   (`to` or `value`) attribute: a map, and every child must then carry
//!   both;
//! - any other child elements: a list of the children's text, skipping
//!   children whose text is empty.

use serde::Serialize;

use crate::document::Element;
use crate::value::{TextMap, ValueKind};
use crate::{WireError, WireResult};

/// Key attribute spellings, in lookup priority.
pub const KEY_ATTRIBUTES: [&str; 2] = ["from", "key"];

/// Value attribute spellings, in lookup priority.
pub const VALUE_ATTRIBUTES: [&str; 2] = ["to", "value"];

/// A parameter value before coercion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum ParamShape {
    /// Text content of a childless node. Empty when the node is empty.
    Scalar(String),
    /// Text of each child element, in document order.
    OrderedList(Vec<String>),
    /// Entries read from child attributes, in first-insertion order.
    KeyValueMap(TextMap),
}

impl ParamShape {
    /// Short description used in diagnostics.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "a scalar",
            Self::OrderedList(_) => ValueKind::ListOfText.as_str(),
            Self::KeyValueMap(_) => ValueKind::MapOfText.as_str(),
        }
    }
}

/// Classifies `param` by its structure.
///
/// # Examples
///
/// ```
/// use paramwire::{ConfigDocument, ParamShape, classify};
///
/// let doc = ConfigDocument::parse(
///     r#"<properties><p><tags><t>a</t><t/><t>b</t></tags></p></properties>"#,
/// )?;
/// let tags = doc.unique_section("p")?.first_child_named("tags").expect("tags");
/// assert_eq!(
///     classify(tags)?,
///     ParamShape::OrderedList(vec!["a".into(), "b".into()])
/// );
/// # Ok::<(), paramwire::WireError>(())
/// ```
///
/// # Errors
///
/// Returns [`WireError::MalformedMapEntry`] when a map-shaped node has a
/// child without a key or value attribute.
pub fn classify(param: &Element) -> WireResult<ParamShape> {
    if !param.has_element_children() {
        return Ok(ParamShape::Scalar(param.text()));
    }
    if is_map(param) {
        return read_map(param).map(ParamShape::KeyValueMap);
    }
    Ok(ParamShape::OrderedList(
        param
            .elements()
            .map(Element::text)
            .filter(|text| !text.is_empty())
            .collect(),
    ))
}

fn first_attribute<'a>(entry: &'a Element, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| entry.attribute(name))
}

fn is_map(param: &Element) -> bool {
    param.elements().any(|entry| {
        first_attribute(entry, &KEY_ATTRIBUTES).is_some()
            && first_attribute(entry, &VALUE_ATTRIBUTES).is_some()
    })
}

fn read_map(param: &Element) -> WireResult<TextMap> {
    let mut map = TextMap::new();
    for entry in param.elements() {
        let malformed = |missing| WireError::MalformedMapEntry {
            parameter: param.name().to_owned(),
            entry: entry.name().to_owned(),
            missing,
        };
        let key = first_attribute(entry, &KEY_ATTRIBUTES).ok_or_else(|| malformed("key' or 'from"))?;
        let value =
            first_attribute(entry, &VALUE_ATTRIBUTES).ok_or_else(|| malformed("value' or 'to"))?;
        map.insert(key.to_owned(), value.to_owned());
    }
    Ok(map)
}
