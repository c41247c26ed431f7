//! Lightweight element tree produced by the components.
//!
//! The host turns these nodes into real DOM (or anything else). The
//! `Display` impl serialises a tree as HTML for server rendering and tests.

use std::fmt;

use crate::props::DomEvent;
use crate::style::Style;

/// An element with a tag, classes, inline style, attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub class_name: Option<String>,
    pub style: Style,
    pub attributes: Vec<(String, String)>,
    /// Events the host should forward to the component
    pub listeners: Vec<DomEvent>,
    pub children: Vec<Node>,
}

/// A node of the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// A `div` element.
    pub fn div() -> Element {
        Element::new("div")
    }

    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text content of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.children.iter().map(Node::text_content).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => write!(f, "{}", Escaped(text)),
            Node::Element(el) => write!(f, "{}", el),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set an attribute, replacing an earlier value.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
        self
    }

    pub fn listener(mut self, event: DomEvent) -> Self {
        if !self.listeners.contains(&event) {
            self.listeners.push(event);
        }
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(class_name) = &self.class_name {
            write!(f, " class=\"{}\"", Escaped(class_name))?;
        }
        if !self.style.is_empty() {
            write!(f, " style=\"{}\"", Escaped(&self.style.to_string()))?;
        }
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, Escaped(value))?;
        }
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// HTML-escapes text and attribute values while formatting.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html() {
        let node: Node = Node::div()
            .class_name("a b")
            .style(Style::new().with("color", "red"))
            .attr("role", "listbox")
            .child(Node::text("1 < 2"))
            .into();
        assert_eq!(
            node.to_html(),
            "<div class=\"a b\" style=\"color: red;\" role=\"listbox\">1 &lt; 2</div>"
        );
    }

    #[test]
    fn test_text_content_nested() {
        let node: Node = Node::div()
            .child(Node::text("Load"))
            .child(Node::div().child(Node::text("ing")))
            .into();
        assert_eq!(node.text_content(), "Loading");
    }

    #[test]
    fn test_display_escapes_attributes() {
        let el = Node::div().attr("aria-label", "\"A\" & <B>");
        assert_eq!(
            el.to_string(),
            "<div aria-label=\"&quot;A&quot; &amp; &lt;B&gt;\"></div>"
        );
    }

    #[test]
    fn test_attr_replaces() {
        let el = Node::div().attr("id", "a").attr("id", "b");
        assert_eq!(el.get_attr("id"), Some("b"));
        assert_eq!(el.attributes.len(), 1);
    }
}
