//! XML parsing into an [`Element`] tree.

use std::fmt::Display;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

use super::Element;

/// Parse `xml` into its single root element.
///
/// Whitespace around text is trimmed; comments, processing instructions and
/// the doctype are dropped; CDATA sections are folded into the element text.
/// `source` only labels errors.
pub(super) fn parse_root(xml: &str, source: &Path) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| parse_error(source, format!("{e} (at byte {position})")))?;

        match event {
            Event::Start(start) => stack.push(start_element(&start, source)?),
            Event::Empty(start) => {
                let element = start_element(&start, source)?;
                attach(&mut stack, &mut root, element, source)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| parse_error(source, "unexpected closing tag"))?;
                attach(&mut stack, &mut root, element, source)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| parse_error(source, e))?;
                push_text(&mut stack, &text, source)?;
            }
            Event::CData(cdata) => {
                let text = String::from_utf8_lossy(&cdata).into_owned();
                push_text(&mut stack, &text, source)?;
            }
            Event::Eof => break,
            // comments, declarations, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(parse_error(
            source,
            format!("unexpected end of document inside <{}>", open.name),
        ));
    }

    root.ok_or_else(|| parse_error(source, "document has no root element"))
}

fn start_element(start: &BytesStart<'_>, source: &Path) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| parse_error(source, e))?;
        let value = attribute
            .unescape_value()
            .map_err(|e| parse_error(source, e))?;
        element.attributes.push((
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    source: &Path,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.append(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(parse_error(source, "document has more than one root element"));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str, source: &Path) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(element) => {
            element.push_text(text);
            Ok(())
        }
        None => Err(parse_error(source, "text outside of the root element")),
    }
}

fn parse_error(source: &Path, reason: impl Display) -> Error {
    Error::DocumentParse {
        path: source.to_path_buf(),
        reason: reason.to_string(),
    }
}
