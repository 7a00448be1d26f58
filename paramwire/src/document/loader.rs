//! Streaming XML reader that assembles an [`Element`] tree.
//!
//! Comments, processing instructions, the XML declaration and any DOCTYPE
//! are skipped. Only the predefined and numeric character references are
//! resolved; external entities are never fetched.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::node::Element;
use crate::{WireError, WireResult};

/// Parses `source` into its root element.
pub(super) fn parse_tree(source: &str) -> WireResult<Element> {
    let mut reader = Reader::from_str(source);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position();
        let event = reader.read_event().map_err(|err| {
            WireError::unparseable(format!("problem loading xml near byte {position}"), err)
        })?;
        match event {
            Event::Start(start) => open.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                close_element(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| WireError::document_format("unexpected closing tag"))?;
                close_element(&mut open, &mut root, element)?;
            }
            Event::Text(text) => {
                let decoded = text
                    .unescape()
                    .map_err(|err| WireError::unparseable("invalid character data", err))?;
                push_text(&mut open, decoded.into_owned())?;
            }
            Event::CData(data) => {
                let decoded = String::from_utf8(data.into_inner().into_owned())
                    .map_err(|err| WireError::unparseable("CDATA section is not UTF-8", err))?;
                push_text(&mut open, decoded)?;
            }
            Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(WireError::document_format(format!(
            "element <{}> is never closed",
            unclosed.name()
        )));
    }
    root.ok_or_else(|| WireError::document_format("document has no root element"))
}

fn open_element(start: &BytesStart<'_>) -> WireResult<Element> {
    let name = utf8(start.local_name().into_inner(), "element name")?;
    let mut element = Element::new(name);
    for parsed in start.attributes() {
        let attribute = parsed
            .map_err(|err| WireError::unparseable(format!("bad attribute on <{name}>"), err))?;
        let key = utf8(attribute.key.local_name().into_inner(), "attribute name")?;
        let value = attribute.unescape_value().map_err(|err| {
            WireError::unparseable(format!("bad value for attribute '{key}' on <{name}>"), err)
        })?;
        element.insert_attribute(key.to_owned(), value.into_owned());
    }
    Ok(element)
}

fn close_element(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> WireResult<()> {
    if let Some(parent) = open.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(WireError::document_format(format!(
            "unexpected second root element <{}>",
            element.name()
        )));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(open: &mut [Element], text: String) -> WireResult<()> {
    match open.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(WireError::document_format(
            "character data outside the root element",
        )),
    }
}

fn utf8<'a>(bytes: &'a [u8], what: &str) -> WireResult<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|err| WireError::unparseable(format!("{what} is not UTF-8"), err))
}
