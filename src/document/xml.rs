//! Owned XML element tree
//!
//! A deliberately small node model: elements and text, nothing else.
//! Comments, processing instructions, and the XML declaration are dropped
//! on parse, and inter-element whitespace is removed, so two documents
//! with the same element structure compare equal.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::errors::{XmlError, XmlResult};

/// A node in an XML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

/// An XML element: name, attributes, children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute (builder style)
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a text child (builder style)
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(XmlNode::Text(text.into()));
        self
    }

    /// Add an element child (builder style)
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Append a child node
    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Replace all children
    pub fn set_children(&mut self, children: Vec<XmlNode>) {
        self.children = children;
    }

    /// Element name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in document order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All child nodes in document order
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements only, in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// Concatenated direct text content
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                XmlNode::Text(t) => Some(t.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Parse a standalone XML document into its root element.
    ///
    /// Rejects malformed input and content after the root element.
    pub fn parse(input: &str) -> XmlResult<Self> {
        let mut reader = Reader::from_str(input);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event() {
                Err(e) => return Err(XmlError::Parse(e.to_string())),
                Ok(Event::Start(start)) => {
                    if root.is_some() && stack.is_empty() {
                        return Err(XmlError::TrailingContent);
                    }
                    stack.push(element_from_start(&start)?);
                }
                Ok(Event::Empty(start)) => {
                    let element = element_from_start(&start)?;
                    attach(element, &mut stack, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    // Mismatched end tags are already rejected by the reader
                    let element = stack
                        .pop()
                        .ok_or_else(|| XmlError::Parse("unexpected end tag".to_string()))?;
                    attach(element, &mut stack, &mut root)?;
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|e| XmlError::Parse(e.to_string()))?
                        .into_owned();
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(XmlNode::Text(text)),
                        None if root.is_some() => return Err(XmlError::TrailingContent),
                        None => return Err(XmlError::NoRootElement),
                    }
                }
                Ok(Event::CData(c)) => {
                    let text = String::from_utf8_lossy(&c).into_owned();
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(XmlNode::Text(text)),
                        None if root.is_some() => return Err(XmlError::TrailingContent),
                        None => return Err(XmlError::NoRootElement),
                    }
                }
                Ok(Event::Decl(_)) | Ok(Event::Comment(_)) | Ok(Event::PI(_))
                | Ok(Event::DocType(_)) => {}
                Ok(Event::Eof) => break,
            }
        }

        if !stack.is_empty() {
            return Err(XmlError::Parse("unclosed element".to_string()));
        }
        root.ok_or(XmlError::NoRootElement)
    }

    /// Serialize with two-space indentation
    pub fn to_pretty_string(&self) -> XmlResult<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_element(&mut writer, self)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| XmlError::Serialize(e.to_string()))
    }
}

fn element_from_start(start: &BytesStart<'_>) -> XmlResult<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| XmlError::Parse(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlError::Parse(e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    element: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> XmlResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.push_child(XmlNode::Element(element));
            Ok(())
        }
        None if root.is_some() => Err(XmlError::TrailingContent),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> XmlResult<()> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children().is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| XmlError::Serialize(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| XmlError::Serialize(e.to_string()))?;

    for child in element.children() {
        match child {
            XmlNode::Element(e) => write_element(writer, e)?,
            XmlNode::Text(t) => writer
                .write_event(Event::Text(BytesText::new(t)))
                .map_err(|e| XmlError::Serialize(e.to_string()))?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(|e| XmlError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_document() {
        let element = Element::parse("<a><b>text</b><c x=\"1\"/></a>").unwrap();
        assert_eq!(element.name(), "a");
        assert_eq!(element.child_elements().count(), 2);

        let b = element.child_elements().next().unwrap();
        assert_eq!(b.text(), "text");

        let c = element.child_elements().nth(1).unwrap();
        assert_eq!(c.attribute("x"), Some("1"));
        assert!(c.children().is_empty());
    }

    #[test]
    fn test_parse_drops_inter_element_whitespace() {
        let element = Element::parse("<a>\n  <b>x</b>\n</a>").unwrap();
        assert_eq!(element.children().len(), 1);
        assert!(matches!(element.children()[0], XmlNode::Element(_)));
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let element = Element::parse("<a>x &lt; y &amp; z</a>").unwrap();
        assert_eq!(element.text(), "x < y & z");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(Element::parse("<a><b></a>").is_err());
        assert!(Element::parse("not xml at all").is_err());
        assert_eq!(Element::parse(""), Err(XmlError::NoRootElement));
    }

    #[test]
    fn test_parse_rejects_trailing_content() {
        assert_eq!(
            Element::parse("<a/><b/>"),
            Err(XmlError::TrailingContent)
        );
    }

    #[test]
    fn test_serialize_escapes_text() {
        let element = Element::new("a").with_text("x < y & z");
        let s = element.to_pretty_string().unwrap();
        assert_eq!(s, "<a>x &lt; y &amp; z</a>");
    }

    #[test]
    fn test_serialize_empty_element_with_attribute() {
        let element = Element::new("name").with_attribute("null", "true");
        assert_eq!(element.to_pretty_string().unwrap(), "<name null=\"true\"/>");
    }

    #[test]
    fn test_parse_serialize_round_trip() {
        let input = "<rows><row><id>1</id><name null=\"true\"/></row></rows>";
        let element = Element::parse(input).unwrap();
        let reparsed = Element::parse(&element.to_pretty_string().unwrap()).unwrap();
        assert_eq!(element, reparsed);
    }
}
