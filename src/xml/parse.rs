//! XML text → [`Document`]

use super::{Document, Element, NodeId, NodeKind};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::str;

/// Deepest element nesting accepted; matches libxml2's default limit
pub const MAX_DEPTH: usize = 256;

/// Why a document could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (at byte {position})")]
pub struct ParseError {
    /// Human-readable cause
    pub message: String,
    /// Byte offset the reader had reached
    pub position: usize,
}

impl ParseError {
    fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

pub(super) fn parse_str(text: &str) -> Result<Document, ParseError> {
    let mut reader = Reader::from_str(text);
    let mut doc = Document::new();
    let mut open: Vec<NodeId> = Vec::new();

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| ParseError::new(e.to_string(), position))?;

        match event {
            Event::Start(start) => {
                check_depth(open.len() + 1, position)?;
                let element = read_element(&start, position)?;
                let id = doc.create_node(NodeKind::Element(element));
                attach(&mut doc, &open, id, position)?;
                open.push(id);
            }
            Event::Empty(start) => {
                check_depth(open.len() + 1, position)?;
                let element = read_element(&start, position)?;
                let id = doc.create_node(NodeKind::Element(element));
                attach(&mut doc, &open, id, position)?;
            }
            Event::End(_) => {
                let Some(closed) = open.pop() else {
                    return Err(ParseError::new("unexpected closing tag", position));
                };
                drop_indentation(&mut doc, closed);
            }
            Event::Text(content) => {
                let value = content
                    .unescape()
                    .map_err(|e| ParseError::new(e.to_string(), position))?;
                let Some(&parent) = open.last() else {
                    if value.trim().is_empty() {
                        continue;
                    }
                    return Err(ParseError::new("text outside the root element", position));
                };
                let id = doc.create_node(NodeKind::Text(value.into_owned()));
                doc.append_child(parent, id);
            }
            Event::CData(content) => {
                let Some(&parent) = open.last() else {
                    return Err(ParseError::new("CDATA outside the root element", position));
                };
                let value = str::from_utf8(&content)
                    .map_err(|e| ParseError::new(e.to_string(), position))?
                    .to_string();
                let id = doc.create_node(NodeKind::CData(value));
                doc.append_child(parent, id);
            }
            Event::Comment(content) => {
                // prolog and epilog comments are dropped
                if let Some(&parent) = open.last() {
                    let value = str::from_utf8(&content)
                        .map_err(|e| ParseError::new(e.to_string(), position))?
                        .to_string();
                    let id = doc.create_node(NodeKind::Comment(value));
                    doc.append_child(parent, id);
                }
            }
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            Event::Eof => break,
        }
    }

    if let Some(&unclosed) = open.last() {
        let name = doc.element(unclosed).map_or("", |e| e.name.as_str());
        return Err(ParseError::new(
            format!("unclosed element <{name}>"),
            text.len(),
        ));
    }
    if doc.root().is_none() {
        return Err(ParseError::new("document has no root element", text.len()));
    }

    Ok(doc)
}

fn check_depth(depth: usize, position: usize) -> Result<(), ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::new(
            format!("elements nested deeper than {MAX_DEPTH} levels"),
            position,
        ));
    }
    Ok(())
}

/// Blank text between sibling nodes is indentation, not content. Blank text
/// that is an element's only child is kept verbatim.
fn drop_indentation(doc: &mut Document, id: NodeId) {
    if doc.nodes[id.0].children.len() < 2 {
        return;
    }
    let children = std::mem::take(&mut doc.nodes[id.0].children);
    doc.nodes[id.0].children = children
        .into_iter()
        .filter(|child| {
            !matches!(&doc.nodes[child.0].kind, NodeKind::Text(text) if text.trim().is_empty())
        })
        .collect();
}

fn read_element(start: &BytesStart<'_>, position: usize) -> Result<Element, ParseError> {
    let name = str::from_utf8(start.name().into_inner())
        .map_err(|e| ParseError::new(e.to_string(), position))?;
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::new(e.to_string(), position))?;
        let key = str::from_utf8(attr.key.as_ref())
            .map_err(|e| ParseError::new(e.to_string(), position))?;
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::new(e.to_string(), position))?;
        element.attributes.push((key.to_string(), value.into_owned()));
    }

    Ok(element)
}

fn attach(
    doc: &mut Document,
    open: &[NodeId],
    id: NodeId,
    position: usize,
) -> Result<(), ParseError> {
    match open.last() {
        Some(&parent) => doc.append_child(parent, id),
        None if doc.root().is_some() => {
            return Err(ParseError::new("more than one root element", position));
        }
        None => doc.set_root(id),
    }
    Ok(())
}
