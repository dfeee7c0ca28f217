//! Minimal XML element tree on top of quick-xml
//!
//! The typed records never touch quick-xml events directly. They read from
//! and write to [`Element`] values; this module owns the conversion between
//! those trees and text.

use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::config::WriteOptions;
use crate::error::HmError;

/// A parsed XML element: name, attributes, text content and child elements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Concatenated character data, kept verbatim; `None` if the element had
    /// none or only whitespace between child elements
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Element with text content and nothing else
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, key: &str, value: &str) {
        self.attributes.push((key.to_string(), value.to_string()));
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// All direct children with the given name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Number of elements in this subtree, including itself
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }
}

fn local_name(bytes: &[u8]) -> Result<String, HmError> {
    let name = std::str::from_utf8(bytes).map_err(|e| HmError::MalformedDocument(e.to_string()))?;
    Ok(match name.rfind(':') {
        Some(pos) => name[pos + 1..].to_string(),
        None => name.to_string(),
    })
}

fn open_element(start: &BytesStart) -> Result<Element, HmError> {
    let mut element = Element::new(local_name(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| HmError::MalformedDocument(e.to_string()))?
            .to_string();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn append_text(element: &mut Element, text: &str) {
    match element.text.as_mut() {
        Some(existing) => existing.push_str(text),
        None => element.text = Some(text.to_string()),
    }
}

/// Attach a finished element to its parent, or make it the document root
fn close_element(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    mut element: Element,
) -> Result<(), HmError> {
    // Indentation between child elements is not content
    if !element.children.is_empty()
        && element.text.as_deref().is_some_and(|t| t.trim().is_empty())
    {
        element.text = None;
    }
    match stack.last_mut() {
        Some(parent) => parent.push(element),
        None => {
            if root.is_some() {
                return Err(HmError::MalformedDocument(format!(
                    "more than one root element (found <{}>)",
                    element.name
                )));
            }
            *root = Some(element);
        }
    }
    Ok(())
}

/// Parse XML text into its root element
pub fn parse_element(xml: &str) -> Result<Element, HmError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                if root.is_some() && stack.is_empty() {
                    return Err(HmError::MalformedDocument(
                        "content after the root element".to_string(),
                    ));
                }
                stack.push(open_element(e)?);
            }
            Event::Empty(ref e) => {
                let element = open_element(e)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    HmError::MalformedDocument("unexpected closing tag".to_string())
                })?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                let text = e.unescape()?;
                match stack.last_mut() {
                    Some(current) => append_text(current, &text),
                    None if text.trim().is_empty() => {}
                    None => {
                        return Err(HmError::MalformedDocument(
                            "text outside the root element".to_string(),
                        ))
                    }
                }
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                let text = std::str::from_utf8(&bytes)
                    .map_err(|e| HmError::MalformedDocument(e.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    append_text(current, text);
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(HmError::MalformedDocument(format!(
            "unclosed element <{}>",
            open.name
        )));
    }
    root.ok_or_else(|| HmError::MalformedDocument("document has no root element".to_string()))
}

fn write_node(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), HmError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let has_text = element.text.as_deref().is_some_and(|t| !t.is_empty());
    if !has_text && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start.borrow()))?;
    if let Some(text) = element.text.as_deref().filter(|t| !t.is_empty()) {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(start.to_end()))?;
    Ok(())
}

/// Serialize an element tree to text
pub fn write_element(element: &Element, options: &WriteOptions) -> Result<String, HmError> {
    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_node(&mut writer, element)?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| HmError::MalformedDocument(e.to_string()))?;
    if options.indent > 0 {
        xml.push('\n');
    }
    Ok(xml)
}
